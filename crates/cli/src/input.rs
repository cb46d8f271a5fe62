use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Parse `X,Y` into a coordinate pair.
pub fn parse_point(s: &str) -> Result<(f32, f32)> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y but got {s:?}"))?;
    let x: f32 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f32 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("non-finite coordinate in {s:?}");
    }
    Ok((x, y))
}

/// Read a JSON array of `[x, y]` pairs.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<(f32, f32)>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f32; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| (x, y)).collect())
}
