use rubrica::rubric::{EvaluationOutcome, QualitativeScore, RubricCatalog};
use std::io::{self, Write};

fn percent(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

pub(crate) fn outcome<W: Write>(
    catalog: &RubricCatalog,
    outcome: &EvaluationOutcome,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Section scores")?;
    for section in catalog.sections() {
        let Some(breakdown) = outcome.breakdown.section(section.key) else {
            continue;
        };
        writeln!(
            out,
            "- {} ({}): {:.2}",
            section.name,
            percent(section.weight),
            breakdown.calificacion
        )?;
        for group in section.groups {
            if let Some(scored) = breakdown.groups.get(group.id) {
                writeln!(out, "    {}: {:.2}", scored.name, scored.calificacion)?;
            }
        }
    }

    writeln!(out, "\nFinal grade: {:.2}", outcome.final_grade)?;
    writeln!(out, "Verdict: {}", outcome.verdict)?;

    if outcome.missing.is_empty() {
        writeln!(out, "\nMissing criteria: none")?;
    } else {
        writeln!(out, "\nMissing criteria ({})", outcome.missing.len())?;
        for entry in &outcome.missing {
            writeln!(out, "- [{}] {} ({})", entry.section_name, entry.name, entry.id)?;
        }
    }
    Ok(())
}

pub(crate) fn catalog<W: Write>(catalog: &RubricCatalog, out: &mut W) -> io::Result<()> {
    for section in catalog.sections() {
        writeln!(
            out,
            "{} ({}) [{}]",
            section.name,
            percent(section.weight),
            section.key
        )?;
        for criterion in section.criteria {
            let group = criterion
                .group
                .and_then(|id| section.group(id))
                .map(|group| format!(" / {}", group.name))
                .unwrap_or_default();
            writeln!(
                out,
                "  - {} {}{}: {}",
                criterion.id,
                percent(criterion.weight),
                group,
                criterion.name
            )?;
        }
    }
    Ok(())
}

pub(crate) fn scale<W: Write>(out: &mut W) -> io::Result<()> {
    for score in QualitativeScore::ALL {
        writeln!(out, "{} {} {}", score.value(), score.label(), score.color())?;
    }
    Ok(())
}
