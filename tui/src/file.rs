//! Reading and writing simulation files.

use golsim_lib::{Config, SimulationSer};
use log::debug;
use std::{error::Error, fmt::Write, fs, path::Path};

/// File formats, chosen by the extension of the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// The plain format: rows, columns, generations, then living cells.
    Plain,
    Json,
    Yaml,
    Toml,
}

impl Format {
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            Some("yaml") | Some("yml") => Format::Yaml,
            Some("toml") => Format::Toml,
            _ => Format::Plain,
        }
    }
}

/// Reads a simulation from a string.
///
/// A plain file starts a new simulation at generation 0.
pub(crate) fn from_str(s: &str, format: Format) -> Result<SimulationSer, Box<dyn Error>> {
    let ser = match format {
        Format::Plain => {
            let config: Config = s.parse()?;
            SimulationSer {
                generation: 0,
                alive_cells: config.alive_cells.clone(),
                config,
            }
        }
        Format::Json => serde_json::from_str(s)?,
        Format::Yaml => serde_yaml::from_str(s)?,
        Format::Toml => toml::from_str(s)?,
    };
    Ok(ser)
}

/// Writes a simulation to a string.
///
/// The plain format cannot store the generation number, so it stores
/// the current board with the number of remaining generations.
pub(crate) fn to_string(ser: &SimulationSer, format: Format) -> Result<String, Box<dyn Error>> {
    let str = match format {
        Format::Plain => {
            let remaining = ser.config.iterations.saturating_sub(ser.generation);
            let mut str = String::new();
            writeln!(str, "{}\n{}\n{}", ser.config.rows, ser.config.cols, remaining)?;
            for (r, c) in ser.alive_cells.iter() {
                writeln!(str, "{} {}", r, c)?;
            }
            str
        }
        Format::Json => serde_json::to_string_pretty(ser)?,
        Format::Yaml => serde_yaml::to_string(ser)?,
        Format::Toml => toml::to_string_pretty(ser)?,
    };
    Ok(str)
}

/// Loads a simulation from a file.
pub(crate) fn load(path: &Path) -> Result<SimulationSer, Box<dyn Error>> {
    let format = Format::from_path(path);
    debug!("loading {} as {:?}", path.display(), format);
    let s = fs::read_to_string(path)
        .map_err(|e| format!("'{}' is an invalid file: {}", path.display(), e))?;
    from_str(&s, format)
}

/// Saves a simulation to a file.
pub(crate) fn save(path: &Path, ser: &SimulationSer) -> Result<(), Box<dyn Error>> {
    let format = Format::from_path(path);
    debug!("saving {} as {:?}", path.display(), format);
    fs::write(path, to_string(ser, format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use golsim_lib::Boundary;
    use std::path::PathBuf;

    fn saved() -> Result<SimulationSer, Box<dyn Error>> {
        let config = Config::new(5, 5, 4)
            .set_boundary(Boundary::Bounded)
            .set_alive_cells(vec![(1, 0), (1, 1), (1, 2)]);
        let mut simulation = config.simulation()?;
        simulation.step();
        Ok(simulation.ser(&config))
    }

    #[test]
    fn format() {
        let format = |s: &str| Format::from_path(&PathBuf::from(s));
        assert_eq!(format("save.json"), Format::Json);
        assert_eq!(format("save.yml"), Format::Yaml);
        assert_eq!(format("dir/save.yaml"), Format::Yaml);
        assert_eq!(format("save.toml"), Format::Toml);
        assert_eq!(format("board.txt"), Format::Plain);
        assert_eq!(format("board"), Format::Plain);
    }

    #[test]
    fn plain() -> Result<(), Box<dyn Error>> {
        let ser = from_str("5\n5\n2\n1 0\n1 1\n1 2\n", Format::Plain)?;
        assert_eq!(ser.generation, 0);
        assert_eq!(ser.alive_cells, vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(ser.config.iterations, 2);

        // One generation done, three remaining.
        assert_eq!(
            to_string(&saved()?, Format::Plain)?,
            "5\n5\n3\n0 1\n1 1\n2 1\n"
        );
        Ok(())
    }

    #[test]
    fn resume() -> Result<(), Box<dyn Error>> {
        let ser = saved()?;
        for &format in &[Format::Json, Format::Yaml, Format::Toml] {
            let loaded = from_str(&to_string(&ser, format)?, format)?;
            assert_eq!(loaded, ser);
            let simulation = loaded.simulation()?;
            assert_eq!(simulation.generation(), 1);
            assert_eq!(simulation.boundary(), Boundary::Bounded);
        }
        Ok(())
    }

    #[test]
    fn invalid() {
        assert!(from_str("5\n5\n", Format::Plain).is_err());
        assert!(from_str("{", Format::Json).is_err());
        assert!(load(Path::new("does/not/exist.txt")).is_err());
    }
}
