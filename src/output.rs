//! Comma separated tables of radiation estimates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::radiation::RadiationSample;
use crate::radiation::profile::{LatitudeProfileRow, LongitudeProfileRow};
use crate::radiation::time_equation::TimeEquationSample;

const TIME_STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// `date, Rg` rows, one per sample.
pub fn write_series<W: Write>(writer: &mut W, samples: &[RadiationSample]) -> Result<()> {
    writeln!(writer, "date, Rg")?;
    for sample in samples {
        writeln!(
            writer,
            "{}, {:.6}",
            sample.time_stamp.format(TIME_STAMP_FORMAT),
            sample.rg
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_time_equation<W: Write>(
    writer: &mut W,
    samples: &[TimeEquationSample],
) -> Result<()> {
    writeln!(writer, "date, tm.eqn")?;
    for sample in samples {
        writeln!(
            writer,
            "{}, {:.6}",
            sample.date.format("%Y-%m-%d"),
            sample.offset_seconds
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_latitude_profile<W: Write>(
    writer: &mut W,
    rows: &[LatitudeProfileRow],
) -> Result<()> {
    writeln!(writer, "lat, rg.03, rg.06, rg.09, rg.12")?;
    for row in rows {
        let [mar, jun, sep, dec] = row.rg;
        writeln!(
            writer,
            "{}, {:.6}, {:.6}, {:.6}, {:.6}",
            row.latitude, mar, jun, sep, dec
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// The first column is the equator longitude in whole degrees.
pub fn write_longitude_profile<W: Write>(
    writer: &mut W,
    rows: &[LongitudeProfileRow],
) -> Result<()> {
    writeln!(writer, "date, rg.03, rg.06, rg.09, rg.12")?;
    for row in rows {
        let [mar, jun, sep, dec] = row.rg;
        writeln!(
            writer,
            "{}, {:.6}, {:.6}, {:.6}, {:.6}",
            row.longitude, mar, jun, sep, dec
        )?;
    }
    writer.flush()?;
    Ok(())
}
