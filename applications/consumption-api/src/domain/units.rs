use super::value::{unwrap_value, FeatureValue, Scalar, Unwrapped};

/// Shown in place of a value that cannot be displayed.
pub const PLACEHOLDER: &str = "--";

/// Display symbol for a backend unit code. Unknown codes are returned as-is.
///
/// Watt readings of 1000 and above are displayed in kilowatts; this only
/// picks the symbol, scaling the value is up to the caller.
pub fn format_unit(unit: &str, value: Option<f64>) -> String {
    if unit == "watt" && value.is_some_and(|v| v >= 1000.0) {
        return "kW".to_string();
    }

    let symbol = match unit {
        "celsius" => "°C",
        "fahrenheit" => "°F",
        "kelvin" => "K",
        "percent" => "%",
        "watt" => "W",
        "kilowatt" => "kW",
        "wattHour" => "Wh",
        "kilowattHour" | "kilowattHours" => "kWh",
        "bar" => "bar",
        "liter" => "L",
        "litersPerHour" => "L/h",
        "cubicMeter" => "m³",
        "cubicMeterPerHour" => "m³/h",
        "hour" | "hours" => "h",
        "minute" | "minutes" => "min",
        "second" | "seconds" => "s",
        "volt" => "V",
        "ampere" => "A",
        "hertz" => "Hz",
        "kelvinPerHour" => "K/h",
        "revolutionsPerSecond" => "rps",
        other => other,
    };
    symbol.to_string()
}

/// Render a feature value for display, e.g. `"21.5 °C"` or `"1.5 kW"`.
pub fn format_value(feature: &FeatureValue) -> String {
    let unwrapped = match unwrap_value(feature) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed feature value");
            return PLACEHOLDER.to_string();
        }
    };

    let text = match unwrapped.value {
        Unwrapped::Absent | Unwrapped::Composite(_) => return PLACEHOLDER.to_string(),
        Unwrapped::Scalar(Scalar::Number(n)) => {
            let (n, unit) = match unwrapped.unit {
                Some("watt") if *n >= 1000.0 => (n / 1000.0, Some("kilowatt")),
                unit => (*n, unit),
            };
            return match unit {
                Some(unit) => format!("{:.1} {}", n, format_unit(unit, Some(n))),
                None => format!("{:.1}", n),
            };
        }
        Unwrapped::Scalar(Scalar::Bool(true)) => "on".to_string(),
        Unwrapped::Scalar(Scalar::Bool(false)) => "off".to_string(),
        Unwrapped::Scalar(Scalar::Text(s)) => s.clone(),
    };

    match unwrapped.unit {
        Some(unit) => format!("{} {}", text, format_unit(unit, None)),
        None => text,
    }
}
