use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
};

/// The file named by a path arg; `None` or "-" select stdio.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[arg(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the whole input as text.
    pub fn read_text(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        self.open_reader()?.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[arg(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read corpus files; one text per file.
pub fn read_corpus_files(paths: &[String]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    paths
        .iter()
        .map(|path| {
            log::info!("Reading corpus: {path}");
            std::fs::read_to_string(path)
                .map_err(|e| -> Box<dyn std::error::Error> { format!("{path}: {e}").into() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path() {
        assert_eq!(file_path(&None), None);
        assert_eq!(file_path(&Some("-".to_string())), None);
        assert_eq!(file_path(&Some("a.txt".to_string())), Some("a.txt"));
    }

    #[test]
    fn test_read_corpus_files() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "the cat").unwrap();

        let texts = read_corpus_files(&[path.to_string_lossy().to_string()]).unwrap();
        assert_eq!(texts, vec!["the cat".to_string()]);

        let missing = dir.path().join("missing.txt");
        assert!(read_corpus_files(&[missing.to_string_lossy().to_string()]).is_err());
    }
}
