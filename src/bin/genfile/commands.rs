use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use spaceforms::ops::translation_distances;
use spaceforms::{
    horizon_radius, read_gen_file, validate, write_gen_file, write_gen_to, GeneratorFile,
    SpaceformsConfig,
};

fn load(path: &Path, config: &SpaceformsConfig) -> Result<GeneratorFile> {
    read_gen_file(path, &config.reader)
        .with_context(|| format!("failed to read generator file {}", path.display()))
}

pub fn inspect(config: &SpaceformsConfig, path: &Path) -> Result<()> {
    let file = load(path, config)?;
    let space = file
        .space_type(config.validation.geometry_epsilon)
        .context("cannot determine the geometry")?;

    println!("file:       {}", path.display());
    if let Some(title) = file.title() {
        println!("title:      {}", title);
    }
    println!("generators: {}", file.len());
    println!("geometry:   {}", space);
    println!("variant:    {:?}", file.variant);
    println!("horizon:    {}", horizon_radius(space, file.variant));

    let distances = translation_distances(&file.generators, space);
    for (i, (g, d)) in file.generators.iter().zip(&distances).enumerate() {
        println!(
            "  [{}] parity {:<8} det {:>+.6} moves origin {:.6}",
            i,
            g.parity.to_string(),
            g.determinant(),
            d
        );
    }
    Ok(())
}

pub fn validate_file(config: &SpaceformsConfig, path: &Path) -> Result<()> {
    let file = load(path, config)?;
    let report = validate(&file.generators, &config.validation)
        .with_context(|| format!("cannot validate {}", path.display()))?;

    println!("geometry:   {}", report.space);
    println!("orientable: {}", report.orientable());
    for check in &report.checks {
        if check.issues.is_empty() {
            println!("  [{}] ok (residual {:.2e})", check.index, check.residual);
        } else {
            for issue in &check.issues {
                println!("  [{}] {}", check.index, issue);
            }
        }
    }

    if !report.is_valid() {
        bail!("{} issue(s) found in {}", report.issue_count(), path.display());
    }
    Ok(())
}

pub fn format(
    config: &SpaceformsConfig,
    path: &Path,
    output: Option<&Path>,
    precision: Option<usize>,
) -> Result<()> {
    let file = load(path, config)?;

    let mut options = config.writer.clone();
    if let Some(precision) = precision {
        options.precision = precision;
    }
    let mut checked = config.clone();
    checked.writer = options.clone();
    checked.validate()?;

    match output {
        Some(out) => write_gen_file(out, &file, &options)
            .with_context(|| format!("failed to write {}", out.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_gen_to(&mut lock, &file, &options)?;
            lock.flush()?;
        }
    }
    Ok(())
}
