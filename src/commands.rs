use crate::render;
use rubrica::error::AppError;
use rubrica::rubric::{
    CriteriaMap, DraftSnapshot, EvaluationRecord, RubricCatalog, ScoringEngine,
};
use std::io::Write;

pub(crate) fn score<W: Write>(
    engine: &ScoringEngine,
    criteria: &CriteriaMap,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let outcome = engine.evaluate(criteria);
    if json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
    } else {
        render::outcome(engine.catalog(), &outcome, out)?;
    }
    Ok(())
}

pub(crate) fn finalize<W: Write>(
    engine: &ScoringEngine,
    criteria: &CriteriaMap,
    out: &mut W,
) -> Result<(), AppError> {
    let record = engine.finalize(criteria)?;
    serde_json::to_writer_pretty(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn restore<W: Write>(
    engine: &ScoringEngine,
    drafts: &[DraftSnapshot],
    record: Option<&EvaluationRecord>,
    out: &mut W,
) -> Result<(), AppError> {
    let resolved = engine.resolve_criteria(drafts, record).ok_or_else(|| {
        AppError::Input("restore needs a graded --draft or a --record".to_string())
    })?;
    serde_json::to_writer_pretty(&mut *out, &resolved)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn catalog<W: Write>(catalog: &RubricCatalog, out: &mut W) -> Result<(), AppError> {
    render::catalog(catalog, out)?;
    Ok(())
}

pub(crate) fn scale<W: Write>(out: &mut W) -> Result<(), AppError> {
    render::scale(out)?;
    Ok(())
}
