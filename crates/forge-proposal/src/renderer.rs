//! PDF generation for submitted site evaluations.

use chrono::Utc;
use forge_core::models::{EvaluationStatus, SiteEvaluation};
use forge_core::{ForgeError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::format::format_currency;

/// Render a proposal PDF for a submitted evaluation.
///
/// Fails with an invalid-state error for anything not yet submitted; draft
/// figures are not quotable.
pub fn render_pdf(evaluation: &SiteEvaluation, farm_name: Option<&str>) -> Result<Vec<u8>> {
    if evaluation.status != EvaluationStatus::Submitted {
        return Err(ForgeError::invalid_state(
            "Proposal PDF is only available for submitted evaluations",
        ));
    }

    // A4 portrait, left margin 25mm.
    let (doc, page, layer) =
        PdfDocument::new("Forge Farm Infrastructure Proposal", Mm(210.0), Mm(297.0), "content");
    let content = doc.get_page(page).get_layer(layer);

    let heading = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ForgeError::Render(e.to_string()))?;
    let body = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ForgeError::Render(e.to_string()))?;

    let mut y = 257.0;
    content.use_text("Forge Farm Infrastructure Proposal", 18.0, Mm(25.0), Mm(y), &heading);
    y -= 18.0;

    let infrastructure = evaluation
        .infrastructure
        .map(|i| i.as_str().to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    let cost = format_currency(
        evaluation.cost_estimate.unwrap_or(0),
        &evaluation.cost_currency,
    );
    let generated = Utc::now().format("%d/%m/%Y %H:%M UTC");

    let lines = [
        format!("Farm: {}", farm_name.unwrap_or("N/A")),
        format!("Evaluation: {}", evaluation.name),
        format!("Area: {} {}", evaluation.area, evaluation.area_unit.label()),
        format!("Infrastructure: {infrastructure}"),
        format!("Estimated Cost: {cost}"),
        format!("Generated: {generated}"),
    ];
    for line in lines {
        content.use_text(line, 12.0, Mm(25.0), Mm(y), &body);
        y -= 9.0;
    }

    doc.save_to_bytes().map_err(|e| ForgeError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::cost::InfrastructureType;
    use forge_core::models::{AreaUnit, EvaluationId, OwnerId};

    fn evaluation(status: EvaluationStatus) -> SiteEvaluation {
        let now = Utc::now();
        SiteEvaluation {
            id: EvaluationId::new(),
            owner: OwnerId::new("alice"),
            farm_id: None,
            name: "North Field Survey".to_string(),
            boundary: Vec::new(),
            area: 6.0,
            area_unit: AreaUnit::Acres,
            slope: Some(2.5),
            infrastructure: Some(InfrastructureType::ShadeNet),
            cost_estimate: Some(2_400_000),
            cost_currency: "INR".to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn draft_evaluations_are_not_renderable() {
        let err = render_pdf(&evaluation(EvaluationStatus::Draft), None).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidState { .. }));
    }

    #[test]
    fn submitted_evaluations_render_a_pdf() {
        let bytes =
            render_pdf(&evaluation(EvaluationStatus::Submitted), Some("Green Acres")).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn missing_optionals_render_with_defaults() {
        let mut e = evaluation(EvaluationStatus::Submitted);
        e.infrastructure = None;
        e.cost_estimate = None;
        let bytes = render_pdf(&e, None).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
