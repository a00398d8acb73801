//! Helpers shared by the command integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset of these helpers")]

use camino::Utf8PathBuf;
use metric_lint_lib::Host;

/// Test host that captures output to in-memory buffers.
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub env: Vec<(&'static str, &'static str)>,
    pub exit_code: Option<i32>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.iter().find(|(k, _)| *k == name).map(|(_, v)| (*v).to_string())
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

pub fn fixture(relative: &str) -> String {
    format!("{}/tests/fixtures/{relative}", env!("CARGO_MANIFEST_DIR"))
}

pub fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}
