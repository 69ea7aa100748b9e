use pricelist_core::compare::{BestPrice, Order};
use pricelist_core::model::{ExtractionStats, LineItem};
use rust_decimal::Decimal;

/// Money the way the printed reports show it: `R$ 17,99`.
fn brl(value: Decimal) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

pub fn format_items(items: &[LineItem]) -> String {
    let mut out = String::new();
    let width = items
        .iter()
        .map(|i| i.description.chars().count())
        .max()
        .unwrap_or(10)
        .max("Produto".len());

    out.push_str(&format!("{:<width$}  {:>12}\n", "Produto", "Preco", width = width));
    for item in items {
        out.push_str(&format!(
            "{:<width$}  {:>12}\n",
            item.description,
            brl(item.price),
            width = width
        ));
    }
    out.push_str(&format!("\nTotal de produtos: {}", items.len()));
    out
}

pub fn format_stats(stats: &ExtractionStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("  pages:                  {}\n", stats.pages));
    out.push_str(&format!("  tables:                 {}\n", stats.tables));
    out.push_str(&format!("  candidate lines:        {}\n", stats.candidate_lines));
    out.push_str(&format!("  matched lines:          {}\n", stats.matched_lines));
    out.push_str(&format!(
        "  rejected (validation):  {}\n",
        stats.rejected_by_validation
    ));
    out.push_str(&format!(
        "  rejected (duplicate):   {}\n",
        stats.rejected_as_duplicate
    ));
    out.push_str(&format!("  conversion errors:      {}\n", stats.conversion_errors));
    out.push_str(&format!("  fallback pages:         {}\n", stats.fallback_pages));
    out
}

pub fn print_best_prices(best: &[BestPrice]) {
    if best.is_empty() {
        println!("No item has a supplier quote to compare.");
        return;
    }

    let width = best
        .iter()
        .map(|b| b.description.chars().count())
        .max()
        .unwrap_or(10);
    let supplier_width = best
        .iter()
        .map(|b| b.supplier.chars().count())
        .max()
        .unwrap_or(10)
        .max("Fornecedor".len());

    println!("=== Menores precos ===\n");
    for bp in best {
        let saving = bp.saving();
        let saving_info = if saving > Decimal::ZERO {
            format!("  (-{})", brl(saving))
        } else {
            String::new()
        };
        println!(
            "  {:<sw$}  {:<width$}  {:>12}{}",
            bp.supplier,
            bp.description,
            brl(bp.price),
            saving_info,
            sw = supplier_width,
            width = width
        );
    }
    println!("\n  Total de produtos: {}", best.len());
}

pub fn print_order(order: &Order) {
    if order.lines.is_empty() {
        println!("No item in the order has a quantity.");
        return;
    }

    let width = order
        .lines
        .iter()
        .map(|l| l.description.chars().count())
        .max()
        .unwrap_or(10);

    println!("=== Pedido - Melhores precos ===\n");
    for line in &order.lines {
        println!(
            "  {:<width$}  {:>12}  {:<12}  {:>5}  {:>14}",
            line.description,
            brl(line.price),
            line.supplier,
            line.quantity,
            brl(line.subtotal),
            width = width
        );
    }
    println!(
        "\n  Total de itens: {} | Valor total: {}",
        order.lines.len(),
        brl(order.total)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl_uses_decimal_comma() {
        assert_eq!(brl(Decimal::new(1799, 2)), "R$ 17,99");
        assert_eq!(brl(Decimal::new(45, 1)), "R$ 4,50");
    }

    #[test]
    fn test_format_items() {
        let items = vec![LineItem {
            description: "GAZE ESTERIL".into(),
            price: Decimal::new(25, 1),
        }];
        let out = format_items(&items);
        assert!(out.contains("GAZE ESTERIL"));
        assert!(out.contains("R$ 2,50"));
        assert!(out.ends_with("Total de produtos: 1"));
    }
}
