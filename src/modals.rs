//! The `modals` command.
//!
//! Recovers modal markup from a version-control revision of the source
//! file. The file is read with `git show`, then scanned line by line:
//! each configured snippet starts at the line carrying its element id and
//! runs through the first plausible closing line. The captured blocks are
//! written next to the site root as paste-ready text files.

use crate::config::SplitConfig;
use crate::document::SplitError;
use crate::utils::exec::SILENT_FILTER;
use crate::utils::fs::write_atomic;
use crate::{exec, log};
use anyhow::Result;

/// Line that closes a top-level modal `div` in the source's indentation.
const BLOCK_CLOSE: &str = "    </div>";

/// Minimum block length before a closing line is trusted; the modals all
/// contain nested `div`s that close earlier with the same indentation.
const MIN_BLOCK_LINES: usize = 10;

/// Extract every configured snippet from the configured revision.
pub fn extract_snippets(config: &SplitConfig) -> Result<()> {
    let root = config.get_root();
    let modals = &config.modals;
    let spec = format!("{}:{}", modals.revision, modals.file);

    let output = exec!(filter=&SILENT_FILTER; root; ["git"]; "show", spec.as_str())?;
    let text = String::from_utf8_lossy(&output.stdout);

    for snippet in &modals.snippets {
        let block = capture_block(&text, &snippet.id)
            .ok_or_else(|| SplitError::ModalNotFound(format!("id=\"{}\"", snippet.id)))?;

        let path = root.join(&snippet.output);
        write_atomic(&path, &block)?;
        log!(
            "modals"; "{}: {} lines from {spec} -> {}",
            snippet.id,
            block.lines().count(),
            path.display()
        );
    }

    Ok(())
}

/// Capture the block opened by the line carrying `id="..."`.
///
/// Capture runs through the first `    </div>` line once the block is
/// past [`MIN_BLOCK_LINES`]; an unterminated block runs to end of input.
fn capture_block(text: &str, id: &str) -> Option<String> {
    let needle = format!("id=\"{id}\"");
    let mut block = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        if !capturing {
            if line.contains(&needle) {
                capturing = true;
                block.push(line);
            }
        } else {
            block.push(line);
            if block.len() > MIN_BLOCK_LINES && line.trim_end() == BLOCK_CLOSE {
                break;
            }
        }
    }

    capturing.then(|| block.join("\n") + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"    <!-- Brew Modal -->
    <div id="brew-modal" class="modal hidden">
        <div class="modal-content">
            <header>
                <h2>Brew</h2>
            </header>
            <div class="modal-body">
                <p>ratio</p>
                <p>grind</p>
                <p>temp</p>
            </div>
        </div>
    </div>

    <!-- Drink Modal -->
    <div id="drink-modal" class="modal hidden">
        <div class="modal-content">
            <header>
                <h2>Drink</h2>
            </header>
            <div class="modal-body">
                <p>size</p>
                <p>milk</p>
                <p>shots</p>
            </div>
        </div>
    </div>
"#;

    #[test]
    fn test_capture_block_bounds() {
        let block = capture_block(SOURCE, "brew-modal").unwrap();
        assert!(block.starts_with("    <div id=\"brew-modal\""));
        assert!(block.ends_with("    </div>\n"));
        assert!(!block.contains("drink-modal"));
    }

    #[test]
    fn test_capture_block_skips_nested_closers() {
        // The nested `        </div>` lines must not end the block
        let block = capture_block(SOURCE, "drink-modal").unwrap();
        assert!(block.contains("modal-body"));
        assert!(block.contains("<p>shots</p>"));
        assert_eq!(block.lines().count(), 12);
    }

    #[test]
    fn test_capture_block_missing_id() {
        assert!(capture_block(SOURCE, "shop-modal").is_none());
    }

    #[test]
    fn test_capture_block_unterminated_runs_to_end() {
        let cut = &SOURCE[..SOURCE.find("    <!-- Drink Modal -->").unwrap()];
        let cut = cut.trim_end_matches(['\n', ' ']);
        let cut = cut.strip_suffix("</div>").unwrap();
        let block = capture_block(cut, "brew-modal").unwrap();
        assert!(block.contains("modal-body"));
    }
}
