/// Water density reference points, (temperature °C, density kg/m³).
/// 1 °C steps up to 10 °C, 5 °C steps above.
const WATER_DENSITY: [(f64, f64); 29] = [
    (0.0, 999.84),
    (1.0, 999.90),
    (2.0, 999.94),
    (3.0, 999.96),
    (4.0, 999.97),
    (5.0, 999.96),
    (6.0, 999.94),
    (7.0, 999.90),
    (8.0, 999.85),
    (9.0, 999.78),
    (10.0, 999.70),
    (15.0, 999.10),
    (20.0, 998.21),
    (25.0, 997.05),
    (30.0, 995.65),
    (35.0, 994.03),
    (40.0, 992.22),
    (45.0, 990.21),
    (50.0, 988.04),
    (55.0, 985.69),
    (60.0, 983.20),
    (65.0, 980.55),
    (70.0, 977.76),
    (75.0, 974.84),
    (80.0, 971.79),
    (85.0, 968.61),
    (90.0, 965.31),
    (95.0, 961.89),
    (100.0, 958.30),
];

/// Specific heat capacity of water in kJ/(kg·K).
pub const WATER_SPECIFIC_HEAT: f64 = 4.186;

/// Density of water in kg/m³ at `temp_c`, linearly interpolated between
/// reference points and clamped to the 0..=100 °C range.
pub fn density(temp_c: f64) -> f64 {
    let (min_t, min_d) = WATER_DENSITY[0];
    let (max_t, max_d) = WATER_DENSITY[WATER_DENSITY.len() - 1];

    // NaN fails every comparison below, so route it to the cold end explicitly
    if temp_c.is_nan() || temp_c <= min_t {
        return min_d;
    }
    if temp_c >= max_t {
        return max_d;
    }

    for pair in WATER_DENSITY.windows(2) {
        let (t1, d1) = pair[0];
        let (t2, d2) = pair[1];
        if temp_c == t1 {
            return d1;
        }
        if temp_c > t1 && temp_c < t2 {
            return d1 + (temp_c - t1) / (t2 - t1) * (d2 - d1);
        }
    }

    max_d
}

/// Heat carried by a water flow, in kW.
///
/// Density is taken at the return temperature, where flow meters usually
/// sit. A negative temperature spread (cooling) yields a negative result.
pub fn thermal_power_kw(flow_l_per_h: f64, supply_c: f64, return_c: f64) -> f64 {
    if flow_l_per_h.is_nan() || flow_l_per_h <= 0.0 {
        return 0.0;
    }

    let flow_m3_per_s = flow_l_per_h / 1000.0 / 3600.0;
    let mass_flow_kg_per_s = flow_m3_per_s * density(return_c);
    mass_flow_kg_per_s * WATER_SPECIFIC_HEAT * (supply_c - return_c)
}
