use crate::dom::document::Document;
use crate::dom::dom_model::{NodeId, UiEvent};
use crate::error::AutofillError;

/// How values land in the document. The native strategy mirrors what a page
/// script would observe from a real user: a value write followed by the
/// notification sequence. Hosts with stricter frameworks can swap in their
/// own strategy.
pub trait ValueCommit {
    fn commit_text(
        &self,
        doc: &mut Document,
        node: NodeId,
        value: &str,
    ) -> Result<(), AutofillError>;

    fn commit_option(
        &self,
        doc: &mut Document,
        node: NodeId,
        value: &str,
    ) -> Result<(), AutofillError>;

    fn commit_checked(
        &self,
        doc: &mut Document,
        node: NodeId,
        checked: bool,
    ) -> Result<(), AutofillError>;
}

/// Default commit protocol: text gets focus/input/change/blur, option and
/// checked state get input/change.
pub struct NativeCommit;

impl ValueCommit for NativeCommit {
    fn commit_text(
        &self,
        doc: &mut Document,
        node: NodeId,
        value: &str,
    ) -> Result<(), AutofillError> {
        if !doc.set_value(node, value) {
            return Err(AutofillError::ElementMissing);
        }
        doc.notify(node, UiEvent::Focus);
        doc.notify(node, UiEvent::Input);
        doc.notify(node, UiEvent::Change);
        doc.notify(node, UiEvent::Blur);
        Ok(())
    }

    fn commit_option(
        &self,
        doc: &mut Document,
        node: NodeId,
        value: &str,
    ) -> Result<(), AutofillError> {
        if !doc.set_value(node, value) {
            return Err(AutofillError::ElementMissing);
        }
        doc.notify(node, UiEvent::Input);
        doc.notify(node, UiEvent::Change);
        Ok(())
    }

    fn commit_checked(
        &self,
        doc: &mut Document,
        node: NodeId,
        checked: bool,
    ) -> Result<(), AutofillError> {
        if !doc.set_checked(node, checked) {
            return Err(AutofillError::ElementMissing);
        }
        doc.notify(node, UiEvent::Input);
        doc.notify(node, UiEvent::Change);
        Ok(())
    }
}
