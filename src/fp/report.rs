use std::fmt::{self, Display};
use std::io::Write;

use super::error::Result;
use super::rules::AssociationRule;

const PREVIEW_ITEMS: usize = 3;

fn preview<T: Display>(items: &[T]) -> String {
    let mut out = items
        .iter()
        .take(PREVIEW_ITEMS)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > PREVIEW_ITEMS {
        out.push_str(&format!(" (+{} more)", items.len() - PREVIEW_ITEMS));
    }
    out
}

fn format_conviction(conviction: f64) -> String {
    if conviction.is_infinite() {
        "∞".to_string()
    } else {
        format!("{conviction:.4}")
    }
}

impl<T: Display> Display for AssociationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  If bought:       {}", preview(&self.antecedent))?;
        writeln!(f, "  Then also bought: {}", preview(&self.consequent))?;
        writeln!(
            f,
            "  Support:    {:.4} ({:.2}%)",
            self.support,
            self.support * 100.0
        )?;
        writeln!(
            f,
            "  Confidence: {:.4} ({:.2}%)",
            self.confidence,
            self.confidence * 100.0
        )?;
        writeln!(f, "  Lift:       {:.4}", self.lift)?;
        write!(f, "  Conviction: {}", format_conviction(self.conviction))
    }
}

/// Human-readable listing of the first `top_n` rules.
pub fn format_rules<T: Display>(rules: &[AssociationRule<T>], top_n: usize) -> String {
    let shown = top_n.min(rules.len());
    let rule_line = "=".repeat(80);

    let mut out = format!("{rule_line}\nTOP {shown} ASSOCIATION RULES\n{rule_line}\n");
    for (i, rule) in rules.iter().take(shown).enumerate() {
        out.push_str(&format!("\nRule {}:\n{rule}\n", i + 1));
    }
    out
}

/// Writes rules as CSV with full item lists joined by `", "`.
pub fn write_rules_csv<T: Display, W: Write>(writer: W, rules: &[AssociationRule<T>]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "antecedent",
        "consequent",
        "support",
        "confidence",
        "lift",
        "conviction",
    ])?;

    let join = |items: &[T]| {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    for rule in rules {
        csv_writer.write_record([
            join(rule.antecedent.as_slice()),
            join(rule.consequent.as_slice()),
            rule.support.to_string(),
            rule.confidence.to_string(),
            rule.lift.to_string(),
            rule.conviction.to_string(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}
