use{
    std::{fs::File, io::{BufReader, Write}},
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    crate::error::SimError,
};

/// Read the parameters from a json file.
/// * If no file is given, an example json with the default
///   parameters is printed and `None` is returned
/// * The parsed `Value` is handed back as well, so it can be
///   written into the headers of output files
pub fn parse<P>(file: Option<&String>) -> Result<Option<(P, Value)>, SimError>
where P: Default + Serialize + DeserializeOwned
{
    match file{
        None => {
            let example = P::default();
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, &example)?;
            writeln!(lock)?;
            Ok(None)
        },
        Some(filename) => {
            let f = File::open(filename)?;
            let buf = BufReader::new(f);
            let json_val: Value = serde_json::from_reader(buf)?;
            let opt: P = serde_json::from_value(json_val.clone())?;
            Ok(Some((opt, json_val)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Toy{
        a: usize,
        b: f64
    }

    impl Default for Toy{
        fn default() -> Self {
            Self{a: 3, b: 0.5}
        }
    }

    #[test]
    fn reads_params_and_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": 7, "b": 0.25}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let (toy, value): (Toy, Value) = parse(Some(&path)).unwrap().unwrap();
        assert_eq!(toy, Toy{a: 7, b: 0.25});
        assert_eq!(value["a"], 7);
    }

    #[test]
    fn missing_field_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": 7}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let res: Result<Option<(Toy, Value)>, _> = parse(Some(&path));
        assert!(matches!(res, Err(SimError::Json(_))));
    }

    #[test]
    fn no_file_prints_example() {
        let res: Option<(Toy, Value)> = parse(None).unwrap();
        assert!(res.is_none());
    }
}
