pub mod json;
pub mod text;

/// Placeholder for absent categorical values in tabular output.
pub const NOT_AVAILABLE: &str = "-";

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn pad_right(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        format!("{}{}", value, " ".repeat(width - len))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
