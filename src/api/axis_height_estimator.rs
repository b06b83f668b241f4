use crate::render::TextMeasurer;

use super::axis_config::TimeAxisConfig;

/// Nominal tick length: one minor plus one major line of text, so major
/// labels (offset by the full length) sit below minor labels (offset by half).
pub(super) fn estimate_tick_length<M>(config: &TimeAxisConfig, measurer: &M) -> f64
where
    M: TextMeasurer + ?Sized,
{
    if let Some(tick_length) = config.tick_length_px {
        return tick_length;
    }
    measurer.line_height(&config.minor_label_font) + measurer.line_height(&config.major_label_font)
}

pub(super) fn estimate_required_time_axis_height<M>(config: &TimeAxisConfig, measurer: &M) -> f64
where
    M: TextMeasurer + ?Sized,
{
    estimate_tick_length(config, measurer) + 2.0 * config.tick_label_padding_px
}

#[cfg(test)]
mod tests {
    use super::{estimate_required_time_axis_height, estimate_tick_length};
    use crate::api::TimeAxisConfig;
    use crate::render::{HeuristicTextMeasurer, LabelFont};

    #[test]
    fn tick_length_sums_both_label_heights() {
        let config = TimeAxisConfig::default()
            .with_minor_label_font(LabelFont::new("Sans", 10.0))
            .with_major_label_font(LabelFont::new("Sans", 14.0));
        assert_eq!(estimate_tick_length(&config, &HeuristicTextMeasurer), 24.0);
        assert_eq!(estimate_required_time_axis_height(&config, &HeuristicTextMeasurer), 34.0);
    }

    #[test]
    fn explicit_tick_length_wins() {
        let config = TimeAxisConfig::default().with_tick_length_px(8.0);
        assert_eq!(estimate_tick_length(&config, &HeuristicTextMeasurer), 8.0);
    }
}
