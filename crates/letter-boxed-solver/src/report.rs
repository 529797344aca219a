//! Writing solutions to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::solution::{Solution, SolutionsByWordCount};

/// Path of the solutions file for a puzzle named `name`
pub fn solutions_path(outdir: &Path, name: &str) -> PathBuf {
    outdir.join(format!("{}-solutions.txt", name))
}

/// Write `solutions` sorted for reading (fewest words, then fewest letters),
/// one per line. Creates `outpath`'s directory if it is missing.
///
/// The file is written next to its destination and renamed into place, so a
/// failed write never leaves a partial solutions file behind.
pub fn write_solutions(
    solutions: &SolutionsByWordCount,
    outpath: &Path,
) -> Result<Vec<Solution>, Error> {
    let all = solutions.all();

    match all.first() {
        Some(best) => log::info!("found {} solutions, best: {}", all.len(), best),
        None => log::info!("no solutions found"),
    }

    let outdir = match outpath.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&outdir)?;

    let tmp_path = outpath.with_extension("txt.tmp");
    log::info!("writing solutions to {:?}", outpath);

    let result = write_lines(&all, &tmp_path).and_then(|()| fs::rename(&tmp_path, outpath));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::io(
            format!("failed to write solutions file {:?}", outpath),
            e,
        ));
    }

    Ok(all)
}

fn write_lines(solutions: &[Solution], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for solution in solutions {
        writeln!(writer, "{}", solution)?;
    }
    writer.flush()
}

fn ensure_dir(dir: &Path) -> Result<(), Error> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => fs::create_dir_all(dir)
            .map_err(|e| Error::io(format!("failed to make output dir {:?}", dir), e)),
        Err(e) => Err(Error::io(format!("failed to stat output dir {:?}", dir), e)),
    }
}
