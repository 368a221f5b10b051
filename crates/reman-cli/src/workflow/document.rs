//! `reman new`: create a resume document, optionally from a template.

use std::path::{Path, PathBuf};

use reman_common_config::ConfigStore;
use reman_common_core::validate_document_name;
use reman_common_fs::{self as rfs, path::display_relative, StoreLayout};
use reman_common_log::spans::{file_span, record_error};
use serde::Serialize;

use crate::error::CliError;
use crate::output::FormattedOutput;
use crate::prompts::Prompter;

pub const NAME_PROMPT: &str = "Name this resume";
pub const USE_TEMPLATE_PROMPT: &str = "Would you like to use a template?";
pub const SELECT_TEMPLATE_PROMPT: &str = "Select the template you wish to use";

#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Path relative to the store root, as shown to the user.
    pub display_path: String,
    pub template: Option<String>,
    pub bytes_copied: Option<u64>,
}

impl FormattedOutput for DocumentReport {
    fn format_text(&self) -> String {
        let mut out = format!("Resume '{}' created", self.display_path);
        if let Some(bytes) = self.bytes_copied {
            out.push_str(&format!("\nCopied {bytes} bytes"));
        }
        out
    }
}

fn choose_template(
    root: &Path,
    prompter: &mut dyn Prompter,
) -> Result<Option<(String, PathBuf)>, CliError> {
    if !prompter.confirm(USE_TEMPLATE_PROMPT)? {
        return Ok(None);
    }

    let templates = rfs::list_templates(root)?;
    if templates.is_empty() {
        return Err(CliError::NoTemplates {
            dir: StoreLayout::new(root).templates_dir(),
        });
    }

    let stems: Vec<String> = templates.iter().map(|t| t.stem.clone()).collect();
    let choice = prompter.select(SELECT_TEMPLATE_PROMPT, &stems)?;

    let template = templates
        .into_iter()
        .find(|t| t.stem == choice)
        .ok_or_else(|| CliError::not_found("template", choice.clone()))?;
    Ok(Some((template.stem, template.path)))
}

/// Create `src/<author>_<name>.tex` in the store at `root`.
///
/// Everything is asked and checked before the file is created. If copying
/// the template fails the empty document is left in place.
pub fn new_document(root: &Path, prompter: &mut dyn Prompter) -> Result<DocumentReport, CliError> {
    let store = ConfigStore::new(root);
    let config = store.load_initialized()?;
    let layout = StoreLayout::new(root);

    let name = prompter.input(NAME_PROMPT, None)?;
    validate_document_name(&name).map_err(|e| CliError::validation("resume name", e))?;

    let template = choose_template(root, prompter)?;

    let author = config.author_name().ok_or_else(|| {
        CliError::user_with_hint("failed to load author name", "use 'reman config' to set")
    })?;

    let path = layout.document_path(author, &name);
    let display_path = display_relative(&path, root);
    if path.exists() {
        return Err(CliError::AlreadyExists {
            message: "resume already exists".to_string(),
            path,
        });
    }

    let mut file = file_span("create", &path).in_scope(|| {
        rfs::create_document(&path).map_err(|e| {
            record_error(&e);
            e
        })
    })?;
    tracing::info!(path = %display_path, "created resume");

    let (template, bytes_copied) = match template {
        Some((stem, src)) => {
            let bytes = file_span("copy", &src).in_scope(|| {
                rfs::copy_into(&src, &mut file).map_err(|e| {
                    record_error(&e);
                    e
                })
            })?;
            tracing::info!(template = %stem, bytes, "copied template");
            (Some(stem), Some(bytes))
        }
        None => (None, None),
    };

    Ok(DocumentReport {
        path,
        display_path,
        template,
        bytes_copied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{Answer, ScriptedPrompter};
    use reman_test_utils::{StoreFixture, TEMPLATE_BODY};
    use std::fs;

    #[test]
    fn test_new_without_template_is_empty() {
        let store = StoreFixture::initialized("Jane");
        let mut prompter = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(false),
        ]);

        let report = new_document(store.root(), &mut prompter).unwrap();

        assert_eq!(report.display_path, "src/Jane_Eng1.tex");
        assert_eq!(report.bytes_copied, None);
        assert_eq!(fs::read(store.path("src/Jane_Eng1.tex")).unwrap().len(), 0);
        assert_eq!(report.format_text(), "Resume 'src/Jane_Eng1.tex' created");
    }

    #[test]
    fn test_new_from_template_copies_bytes() {
        let store = StoreFixture::initialized("Jane");
        store.add_template("base");
        store.add_template("academic");
        let mut prompter = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(true),
            Answer::Select("base".into()),
        ]);

        let report = new_document(store.root(), &mut prompter).unwrap();

        assert_eq!(report.template.as_deref(), Some("base"));
        assert_eq!(report.bytes_copied, Some(TEMPLATE_BODY.len() as u64));
        assert_eq!(
            fs::read_to_string(store.path("src/Jane_Eng1.tex")).unwrap(),
            TEMPLATE_BODY
        );
        assert!(report
            .format_text()
            .ends_with(&format!("Copied {} bytes", TEMPLATE_BODY.len())));
    }

    #[test]
    fn test_invalid_name_touches_nothing() {
        let store = StoreFixture::initialized("Jane");
        let mut prompter = ScriptedPrompter::new([Answer::Input("My Resume".into())]);

        let err = new_document(store.root(), &mut prompter).unwrap_err();

        assert_eq!(err.code(), "E004");
        assert_eq!(
            err.to_string(),
            "use of special characters or spaces not allowed"
        );
        assert_eq!(prompter.asked(), [NAME_PROMPT]);
        assert_eq!(fs::read_dir(store.path("src")).unwrap().count(), 3);
    }

    #[test]
    fn test_empty_name() {
        let store = StoreFixture::initialized("Jane");
        let mut prompter = ScriptedPrompter::new([Answer::Input(String::new())]);

        let err = new_document(store.root(), &mut prompter).unwrap_err();
        assert_eq!(err.to_string(), "must have a name");
    }

    #[test]
    fn test_no_templates() {
        let store = StoreFixture::initialized("Jane");
        let mut prompter = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(true),
        ]);

        let err = new_document(store.root(), &mut prompter).unwrap_err();

        assert_eq!(err.code(), "E008");
        assert!(!store.path("src/Jane_Eng1.tex").exists());
    }

    #[test]
    fn test_existing_document_is_kept() {
        let store = StoreFixture::initialized("Jane");
        store.write_file("src/Jane_Eng1.tex", "mine");
        let mut prompter = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(false),
        ]);

        let err = new_document(store.root(), &mut prompter).unwrap_err();

        assert_eq!(err.code(), "E007");
        assert_eq!(err.to_string(), "resume already exists");
        assert_eq!(
            fs::read_to_string(store.path("src/Jane_Eng1.tex")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn test_requires_initialized_store() {
        let store = StoreFixture::empty();
        store.create_layout();
        let mut prompter = ScriptedPrompter::default();

        let err = new_document(store.root(), &mut prompter).unwrap_err();

        assert_eq!(err.code(), "E003");
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_missing_author_has_hint() {
        let store = StoreFixture::empty();
        store.create_layout();
        store.write_config("$version: 0.1.0\n");
        let mut prompter = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(false),
        ]);

        let err = new_document(store.root(), &mut prompter).unwrap_err();

        assert_eq!(err.to_string(), "failed to load author name");
        assert_eq!(err.hint(), Some("use 'reman config' to set"));
    }
}
