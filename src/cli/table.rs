use super::ui;
use crate::core::engine::{self, parse_amount};
use crate::core::format::FormattedAmount;
use crate::core::rate::{
    BASE_CURRENCY, ExchangeRate, RateQuote, RateSource, TARGET_CURRENCY, resolve_rate,
};
use crate::core::unit::UnitMultiplier;
use comfy_table::Cell;

/// One line of the conversion table: the amount read in a given unit.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub unit: UnitMultiplier,
    pub won_total: Option<f64>,
    pub display: Option<FormattedAmount>,
}

pub fn build_rows(raw_amount: &str, rate: Option<ExchangeRate>) -> Vec<TableRow> {
    let amount = parse_amount(raw_amount).ok();
    UnitMultiplier::ALL
        .into_iter()
        .map(|unit| TableRow {
            unit,
            won_total: amount.map(|a| a * unit.factor()),
            display: engine::convert(raw_amount, unit, rate),
        })
        .collect()
}

fn rate_line(quote: Option<&RateQuote>) -> String {
    match quote {
        Some(quote) => {
            let updated = quote
                .updated_at
                .map(|t| format!(", atualizada em {}", t.format("%Y-%m-%d %H:%M UTC")))
                .unwrap_or_default();
            format!(
                "Cotação: 1 {} = {} {} ({}{})",
                BASE_CURRENCY, quote.rate, TARGET_CURRENCY, quote.source, updated
            )
        }
        None => ui::style_text("Cotação indisponível", ui::StyleType::Error),
    }
}

pub fn render_table(raw_amount: &str, rows: &[TableRow], quote: Option<&RateQuote>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Unidade"),
        ui::header_cell(&format!("Total ({BASE_CURRENCY})")),
        ui::header_cell(&format!("Valor ({TARGET_CURRENCY})")),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.unit.label()),
            ui::format_optional_cell(row.won_total, |w| format!("{w:.0}")),
            ui::format_optional_cell(row.display, |d| format!("R$ {d}")),
        ]);
    }

    format!(
        "{} {}\n{}\n{}",
        ui::style_text("Valor digitado:", ui::StyleType::Label),
        raw_amount.trim(),
        table,
        ui::style_text(&rate_line(quote), ui::StyleType::Subtle)
    )
}

/// Prints the amount converted under every unit multiplier.
pub async fn run(source: &dyn RateSource, raw_amount: &str) -> Vec<TableRow> {
    let (state, quote) = ui::with_spinner("Buscando cotação...", resolve_rate(source)).await;

    let rows = build_rows(raw_amount, state.rate());
    println!("{}", render_table(raw_amount, &rows, quote.as_ref()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rows_covers_every_unit() {
        let rows = build_rows("1", Some(ExchangeRate::FIXED));
        let units: Vec<UnitMultiplier> = rows.iter().map(|r| r.unit).collect();
        assert_eq!(units, UnitMultiplier::ALL.to_vec());

        let displays: Vec<String> = rows
            .iter()
            .map(|r| r.display.map(|d| d.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(displays, vec!["3,80 milhões", "3,80 mil", "3,80", "0,00"]);
        assert_eq!(rows[0].won_total, Some(1e9));
    }

    #[test]
    fn test_build_rows_without_rate_keeps_won_total() {
        let rows = build_rows("2", None);
        assert!(rows.iter().all(|r| r.display.is_none()));
        assert_eq!(rows[3].won_total, Some(2.0));
    }

    #[test]
    fn test_build_rows_invalid_amount() {
        let rows = build_rows("abc", Some(ExchangeRate::FIXED));
        assert!(rows.iter().all(|r| r.won_total.is_none() && r.display.is_none()));
    }

    #[test]
    fn test_render_table_contents() {
        let rows = build_rows("1", Some(ExchangeRate::FIXED));
        let quote = RateQuote {
            rate: ExchangeRate::FIXED,
            source: "fixed".to_string(),
            updated_at: None,
        };
        let rendered = render_table("1", &rows, Some(&quote));
        assert!(rendered.contains("Bilhões"));
        assert!(rendered.contains("R$ 3,80 milhões"));
        assert!(rendered.contains("1 KRW = 0.0038 BRL (fixed)"));
    }

    #[test]
    fn test_render_table_without_rate() {
        let rows = build_rows("1", None);
        let rendered = render_table("1", &rows, None);
        assert!(rendered.contains("N/A"));
        assert!(rendered.contains("Cotação indisponível"));
    }
}
