use crate::annotation::polygon::{AnnotationLine, Polygon, QUAD_VERTICES};
use crate::foundation::error::{ExposureError, ExposureResult};

const TOKENS_PER_LABEL: usize = QUAD_VERTICES * 2;

/// Parse one record of the form `<frame> <label_count> x1 y1 x2 y2 x3 y3 x4 y4 [...]`.
///
/// Tokens are separated by ASCII whitespace. The record must carry exactly
/// `8 * label_count` integer coordinates after the count. Coordinates are passed through
/// unvalidated.
pub fn parse_line(line: &str) -> ExposureResult<AnnotationLine> {
    let toks: Vec<&str> = line.split_ascii_whitespace().collect();
    let [frame, count, coords @ ..] = toks.as_slice() else {
        return Err(ExposureError::malformed(format!(
            "expected '<frame> <label_count> ...', got {} token(s)",
            toks.len()
        )));
    };

    let label_count: usize = count.parse().map_err(|_| {
        ExposureError::malformed(format!(
            "label count '{count}' is not a non-negative integer"
        ))
    })?;

    let expected = label_count
        .checked_mul(TOKENS_PER_LABEL)
        .ok_or_else(|| ExposureError::malformed(format!("label count {label_count} too large")))?;
    if coords.len() != expected {
        return Err(ExposureError::malformed(format!(
            "{label_count} label(s) need {expected} coordinates, got {}",
            coords.len()
        )));
    }

    let values = coords
        .iter()
        .map(|t| {
            t.parse::<i32>().map_err(|_| {
                ExposureError::malformed(format!("coordinate '{t}' is not an integer"))
            })
        })
        .collect::<ExposureResult<Vec<i32>>>()?;

    let polygons = values
        .chunks_exact(TOKENS_PER_LABEL)
        .map(|c| Polygon::quad([(c[0], c[1]), (c[2], c[3]), (c[4], c[5]), (c[6], c[7])]))
        .collect();

    Ok(AnnotationLine {
        frame: (*frame).to_string(),
        polygons,
    })
}

/// Lazily parse every line of an annotation source, in order.
///
/// Blank lines are malformed records. Errors carry their 1-based line number.
pub fn records(text: &str) -> impl Iterator<Item = ExposureResult<AnnotationLine>> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(line).map_err(|e| e.at_line(i + 1)))
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/parse.rs"]
mod tests;
