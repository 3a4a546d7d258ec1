use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::Timestamp;

use screener_core::{format_metric, DisplayStyle, ScoreCard, Verdict};

const COLOR_BLUE: u32 = 0x3498DB;
const COLOR_GREEN: u32 = 0x2ECC71;
const COLOR_RED: u32 = 0xE74C3C;

fn card_color(card: &ScoreCard) -> u32 {
    let mut any_fail = false;
    let mut any_pass = false;
    for outcome in card.sections.iter().flat_map(|s| &s.outcomes) {
        match outcome.verdict {
            Verdict::Fail => any_fail = true,
            Verdict::Pass => any_pass = true,
            Verdict::Indeterminate => {}
        }
    }
    if any_fail {
        COLOR_RED
    } else if any_pass {
        COLOR_GREEN
    } else {
        COLOR_BLUE
    }
}

fn footer() -> CreateEmbedFooter {
    CreateEmbedFooter::new("기준: 최근 결산 및 PSR 매수원칙 적용")
}

pub fn build_score_card_embed(card: &ScoreCard) -> CreateEmbed {
    let price = format_metric(card.metrics.current_price, DisplayStyle::Plain);
    let low = format_metric(card.metrics.week_52_low, DisplayStyle::Plain);
    let high = format_metric(card.metrics.week_52_high, DisplayStyle::Plain);
    let description = format!("현재 주가: **{}원** | 52주: {} ~ {}", price, low, high);

    let mut embed = CreateEmbed::new()
        .title(format!("\u{1F680} {} ({}) 실시간 분석", card.name, card.code))
        .description(description)
        .color(card_color(card))
        .footer(footer())
        .timestamp(Timestamp::now());

    for section in &card.sections {
        let value = section
            .outcomes
            .iter()
            .map(|o| {
                format!(
                    "{}: {} ({} {})",
                    o.name,
                    o.display,
                    o.verdict.glyph(),
                    o.threshold
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field(format!("\u{1F539} {}", section.title), value, false);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::MetricSet;
    use screening_engine::{report, rules};

    fn card(metrics: MetricSet) -> ScoreCard {
        report::assemble("테스트", "000001", metrics.clone(), rules::evaluate(&metrics))
    }

    #[test]
    fn all_indeterminate_card_is_neutral_colored() {
        assert_eq!(card_color(&card(MetricSet::default())), COLOR_BLUE);
    }

    #[test]
    fn any_fail_turns_card_red() {
        let metrics = MetricSet {
            market_cap: Some(100.0),
            ..MetricSet::default()
        };
        assert_eq!(card_color(&card(metrics)), COLOR_RED);
    }

    #[test]
    fn all_pass_card_is_green() {
        let metrics = MetricSet {
            market_cap: Some(5000.0),
            psr: Some(0.4),
            roe: Some(10.0),
            debt_ratio: Some(50.0),
            ..MetricSet::default()
        };
        assert_eq!(card_color(&card(metrics)), COLOR_GREEN);
    }
}
