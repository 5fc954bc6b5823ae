use shared::Verdict;

pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-4xl rounded-xl shadow-lg mt-16";
pub const CONTAINER_WIDE: &str = "container mx-auto px-6 py-10 max-w-6xl mt-16";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";

pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_BASE, &combine_classes(BUTTON_PRIMARY, BUTTON_FULL))
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

/// Border and tint for a result box, keyed by verdict.
pub fn verdict_box(verdict: Verdict) -> String {
    let accent = match verdict {
        Verdict::Scam => "border-red-600 bg-red-900/30",
        Verdict::Safe => "border-green-600 bg-green-900/30",
        Verdict::Suspicious => "border-yellow-600 bg-yellow-900/30",
        Verdict::Error => "border-gray-600 bg-gray-800/60",
    };
    combine_classes("border rounded-lg p-6 mt-6 text-center", accent)
}

pub fn verdict_text(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Scam => "text-red-400",
        Verdict::Safe => "text-green-400",
        Verdict::Suspicious => "text-yellow-400",
        Verdict::Error => "text-gray-400",
    }
}

/// Fill bar for a confidence meter. Height is left to the caller since
/// the result box and the carousel render at different sizes.
pub fn meter_fill(verdict: Verdict) -> String {
    let color = match verdict {
        Verdict::Scam => "bg-red-500",
        Verdict::Safe => "bg-green-500",
        Verdict::Suspicious => "bg-yellow-500",
        Verdict::Error => "bg-gray-500",
    };
    combine_classes("rounded-full transition-all duration-700 ease-out", color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Verdict;

    #[test]
    fn test_meter_fill_leaves_height_to_callers() {
        for verdict in [Verdict::Scam, Verdict::Safe, Verdict::Suspicious, Verdict::Error] {
            let classes = meter_fill(verdict);
            assert!(
                !classes.split_whitespace().any(|c| c.starts_with("h-")),
                "meter_fill must not set a height: {}",
                classes
            );
        }
        assert!(meter_fill(Verdict::Scam).contains("bg-red-500"));
        assert!(meter_fill(Verdict::Error).contains("bg-gray-500"));
    }
}
