//! Document controller seam
//!
//! Loading, rendering and unloading documents belong to the controller.
//! The tab core only keeps a shared handle to it and asks for the file
//! path and the outline when saving or restoring view state.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use super::outline::OutlineTree;

/// A loaded document.
pub trait DocumentController: fmt::Debug {
    /// Path the document was loaded from (may change after save-as).
    fn file_path(&self) -> &Path;

    /// The navigable outline, if the document has one.
    fn outline(&self) -> Option<&OutlineTree> {
        None
    }
}

/// Shared handle held by a tab and mirrored by its window.
pub type ControllerRef = Rc<dyn DocumentController>;

/// Identity comparison of two optional controller handles.
pub fn same_controller(a: Option<&ControllerRef>, b: Option<&ControllerRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct Doc(PathBuf);

    impl DocumentController for Doc {
        fn file_path(&self) -> &Path {
            &self.0
        }
    }

    #[test]
    fn test_same_controller_is_identity() {
        let a: ControllerRef = Rc::new(Doc(PathBuf::from("/a.pdf")));
        let a2 = Rc::clone(&a);
        let b: ControllerRef = Rc::new(Doc(PathBuf::from("/a.pdf")));

        assert!(same_controller(Some(&a), Some(&a2)));
        assert!(!same_controller(Some(&a), Some(&b)));
        assert!(!same_controller(Some(&a), None));
        assert!(same_controller(None, None));
    }

    #[test]
    fn test_default_outline_is_none() {
        let doc = Doc(PathBuf::from("/a.pdf"));
        assert!(doc.outline().is_none());
    }
}
