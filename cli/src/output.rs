//! Result rendering: ranked human-readable text or a JSON envelope.
//!
//! JSON goes to stdout untouched by any styling so it can be piped into
//! other tools; diagnostics stay on stderr.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use recsys_core::Recommendation;

/// Renders the ranked results as human-readable text.
pub fn human_report(results: &[Recommendation]) -> String {
    let mut out = String::new();

    out.push_str("\n--- Recommendation Results (Hybrid Scoring) ---\n");

    if results.is_empty() {
        out.push_str("\n(no matching products)\n");
    }

    for (rank, rec) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{} {}: {} (Brand: {})\n",
            "RANK".green().bold(),
            rank + 1,
            rec.product_name.bold(),
            rec.brand
        ));
        out.push_str(&format!(
            "  {} {}%\n",
            "> Match Score:".cyan(),
            rec.score_percent
        ));
        out.push_str(&format!(
            "  {} Application={}, Power={}\n",
            "> Product Features:".cyan(),
            rec.application,
            rec.power_usage
        ));
    }

    out.push_str("-------------------------------------------\n");
    out
}

/// Prints the ranked results as human-readable text on stdout.
pub fn print_human(results: &[Recommendation]) {
    print!("{}", human_report(results));
}

/// Prints the results as the `{"success": true, "data": [...]}` JSON
/// envelope on stdout.
pub fn print_json(results: &[Recommendation]) -> Result<()> {
    let envelope = json!({
        "success": true,
        "data": results,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Recommendation> {
        vec![Recommendation {
            product_name: "Vac100".to_string(),
            brand: "Acme".to_string(),
            application: "Woodworking".to_string(),
            power_usage: "High".to_string(),
            score_percent: 84.5,
            image_url: String::new(),
        }]
    }

    #[test]
    fn report_lists_ranked_products() {
        let report = human_report(&sample());
        assert!(report.contains("1: Vac100"));
        assert!(report.contains("(Brand: Acme)"));
        assert!(report.contains("84.5%"));
        assert!(report.contains("Application=Woodworking, Power=High"));
    }

    #[test]
    fn report_handles_empty_results() {
        let report = human_report(&[]);
        assert!(report.contains("(no matching products)"));
    }

    #[test]
    fn json_envelope_shape() {
        let envelope = json!({
            "success": true,
            "data": sample(),
        });
        let text = serde_json::to_string(&envelope).unwrap();
        assert!(text.contains("\"success\":true"));
        assert!(text.contains("\"Product_Name\":\"Vac100\""));
    }
}
