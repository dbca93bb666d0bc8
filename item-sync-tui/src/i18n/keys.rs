//! Translation key definitions
//!
//! Every piece of UI text is a field of [`Translations`], so a missing
//! translation is a compile error.
//!
//! ## Grouping
//!
//! 1. **By UI component**: text belongs to the component it appears in
//! 2. **Modal content under `modal.*`**
//! 3. **User notices under `notice.*`**
//! 4. **Key hints under `hints.*`**

/// Root of all translated text
pub struct Translations {
    pub common: CommonTexts,
    pub form: FormTexts,
    pub list: ListTexts,
    pub hints: HintTexts,
    pub modal: ModalTexts,
    pub notice: NoticeTexts,
    pub status_bar: StatusBarTexts,
    pub help: HelpTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub error: &'static str,
}

// ============================================================================
// Form panel
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    pub name_label: &'static str,
    pub placeholder: &'static str,
    /// Submit label in create mode
    pub add_item: &'static str,
    /// Submit label in edit mode
    pub update_item: &'static str,
    /// Prefix before the id of the item being edited
    pub editing: &'static str,
}

// ============================================================================
// Item list panel
// ============================================================================

pub struct ListTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// Modals
// ============================================================================

pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    pub confirm_delete_message: &'static str,
    pub alert_title: &'static str,
    pub press_any_key: &'static str,
    pub help_title: &'static str,
}

// ============================================================================
// Notices
// ============================================================================

pub struct NoticeTexts {
    pub empty_name: &'static str,
    pub list_failed: &'static str,
    pub get_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub unreachable: &'static str,
}

// ============================================================================
// Status bar
// ============================================================================

pub struct StatusBarTexts {
    pub last_sync: &'static str,
    pub never_synced: &'static str,
}

// ============================================================================
// Help
// ============================================================================

pub struct HelpTexts {
    pub global: &'static str,
    pub form: &'static str,
    pub list: &'static str,
    pub switch_panel: &'static str,
    pub reload: &'static str,
    pub show_help: &'static str,
    pub quit: &'static str,
    pub edit_text: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub close_hint: &'static str,
}
