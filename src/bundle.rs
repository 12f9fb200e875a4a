//! Compiling the staged iconset into an `.icns` bundle via an external tool.

use std::path::Path;
use std::process::Command;

use crate::error::IconError;

/// Default icon compiler, shipped with macOS.
pub const DEFAULT_TOOL: &str = "iconutil";

/// Invoke the icon compiler: `<tool> -c icns <iconset_dir> -o <output>`.
///
/// # Errors
///
/// Returns [`IconError::BundlerLaunch`] if the tool cannot be spawned
/// (typically: not on the PATH) and [`IconError::BundlerFailed`] with the
/// tool's stderr if it exits non-zero. No retry is attempted; a failed
/// bundle leaves the staging directory in place for inspection.
pub fn compile_icns(tool: &str, iconset_dir: &Path, output: &Path) -> Result<(), IconError> {
    let result = Command::new(tool)
        .args(["-c", "icns"])
        .arg(iconset_dir)
        .arg("-o")
        .arg(output)
        .output()
        .map_err(|source| IconError::BundlerLaunch { tool: tool.to_string(), source })?;

    if result.status.success() {
        Ok(())
    } else {
        Err(IconError::BundlerFailed {
            tool: tool.to_string(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_a_launch_error() {
        let err = compile_icns(
            "heartgen-no-such-tool",
            Path::new("does-not-matter.iconset"),
            Path::new("out.icns"),
        )
        .unwrap_err();
        assert!(matches!(err, IconError::BundlerLaunch { .. }));
        assert!(err.to_string().contains("heartgen-no-such-tool"));
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_is_a_bundler_failure() {
        let err =
            compile_icns("false", Path::new("x.iconset"), Path::new("out.icns")).unwrap_err();
        match err {
            IconError::BundlerFailed { tool, status, .. } => {
                assert_eq!(tool, "false");
                assert!(!status.success());
            }
            other => panic!("expected BundlerFailed, got {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn successful_tool_run_is_ok() {
        compile_icns("true", Path::new("x.iconset"), Path::new("out.icns")).unwrap();
    }
}
