// ─────────────────────────────────────────────────────────────────────
// ForceLab — Explanation Prompt
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seam to the external text-generation service that explains a result.
//!
//! The service is abstract here. A failed or empty explanation degrades to
//! [`FALLBACK_EXPLANATION`]; the numeric result is never affected.

use forcelab_types::error::{ForceLabError, ForceLabResult};
use forcelab_types::state::ScenarioResult;
use tracing::warn;

/// Shown in place of the explanation when the service cannot provide one.
pub const FALLBACK_EXPLANATION: &str =
    "An explanation could not be generated right now. The calculated results above are complete.";

/// Turns a prompt into a markdown explanation.
pub trait ExplanationService {
    fn explain(&self, prompt: &str) -> ForceLabResult<String>;
}

impl<F> ExplanationService for F
where
    F: Fn(&str) -> ForceLabResult<String>,
{
    fn explain(&self, prompt: &str) -> ForceLabResult<String> {
        self(prompt)
    }
}

/// Prompt embedding the scenario name and the full result as JSON.
pub fn build_prompt(result: &ScenarioResult) -> ForceLabResult<String> {
    let kind = result.kind();
    let json = serde_json::to_string_pretty(result)?;
    Ok(format!(
        "You are a physics tutor. A student ran the \"{title}\" scenario and obtained \
         the following results (SI units, g in m/s²):\n\n```json\n{json}\n```\n\n\
         Explain step by step, for a secondary-school student, which formulas produce \
         these values and what they mean physically. Answer in Markdown with short \
         headings and bullet points.",
        title = kind.title(),
    ))
}

/// Ask `service` to explain `result`, falling back on any failure.
pub fn explain_or_fallback<S>(service: &S, result: &ScenarioResult) -> String
where
    S: ExplanationService + ?Sized,
{
    let kind = result.kind();
    let explanation = build_prompt(result).and_then(|prompt| service.explain(&prompt));
    match explanation {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(scenario = %kind, "explanation service returned an empty response");
            FALLBACK_EXPLANATION.to_string()
        }
        Err(err) => {
            warn!(scenario = %kind, error = %err, "explanation unavailable, using fallback");
            FALLBACK_EXPLANATION.to_string()
        }
    }
}

/// Service that always fails; used when no backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl ExplanationService for Unconfigured {
    fn explain(&self, _prompt: &str) -> ForceLabResult<String> {
        Err(ForceLabError::Explanation(
            "no explanation service configured".to_string(),
        ))
    }
}
