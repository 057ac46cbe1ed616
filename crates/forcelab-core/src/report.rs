// ─────────────────────────────────────────────────────────────────────
// ForceLab — Result Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Labelled display values for a computed result, two decimals each.

use std::fmt;

use forcelab_types::scenario::ScenarioKind;
use forcelab_types::state::ScenarioResult;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: ScenarioKind,
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Find a line by label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.title())?;
        for line in &self.lines {
            if line.unit.is_empty() {
                writeln!(f, "  {}: {}", line.label, line.value)?;
            } else {
                writeln!(f, "  {}: {} {}", line.label, line.value, line.unit)?;
            }
        }
        Ok(())
    }
}

/// Round to two decimals, without printing "-0.00".
fn two_decimals(value: f64) -> String {
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("{value:.2}")
}

fn number(label: &'static str, value: f64, unit: &'static str) -> ReportLine {
    ReportLine {
        label,
        value: two_decimals(value),
        unit,
    }
}

fn text(label: &'static str, value: impl Into<String>) -> ReportLine {
    ReportLine {
        label,
        value: value.into(),
        unit: "",
    }
}

pub fn report(result: &ScenarioResult) -> Report {
    let lines = match result {
        ScenarioResult::InclinedPlane(r) => vec![
            number("Normal force", r.normal_force, "N"),
            number("Friction force", r.friction_force, "N"),
            number("Gravitational force", r.gravitational_force, "N"),
            number("Acceleration", r.acceleration, "m/s²"),
            text("Direction", r.direction.as_str()),
        ],
        ScenarioResult::FreeFall(r) => vec![
            number("Fall time", r.time, "s"),
            number("Final velocity", r.final_velocity, "m/s"),
            number("Acceleration", r.acceleration, "m/s²"),
        ],
        ScenarioResult::VariableForces(r) => vec![
            number("Final acceleration", r.acceleration, "m/s²"),
            number("Final velocity", r.velocity, "m/s"),
            number("Displacement", r.displacement, "m"),
            text("Samples", r.sample_count().to_string()),
        ],
        ScenarioResult::Equilibrium(r) => vec![
            number("Net force X", r.total_force_x, "N"),
            number("Net force Y", r.total_force_y, "N"),
            text("In equilibrium", if r.is_equilibrium { "yes" } else { "no" }),
        ],
        ScenarioResult::SuspendedObject(r) => vec![
            number("Weight", r.gravitational_force, "N"),
            number("Rope tension", r.tension, "N"),
        ],
    };
    Report {
        kind: result.kind(),
        lines,
    }
}
