//! English translations (en-US)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, ListTexts, ModalTexts, NoticeTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Item Sync",
        cancel: "Cancel",
        delete: "Delete",
        error: "Error",
    },

    form: FormTexts {
        title: "Item",
        name_label: "Name",
        placeholder: "Type an item name",
        add_item: "Add item",
        update_item: "Update item",
        editing: "Editing item",
    },

    list: ListTexts {
        title: "Items",
        empty: "No items yet",
        edit: "Edit",
        delete: "Delete",
    },

    hints: HintTexts {
        switch_panel: "Switch panel",
        submit: "Save",
        cancel_edit: "Cancel edit",
        select: "Select",
        edit: "Edit",
        delete: "Delete",
        reload: "Reload",
        help: "Help",
        quit: "Quit",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirm Deletion",
        confirm_delete_message: "Are you sure you want to delete this item?",
        alert_title: "Attention",
        press_any_key: "Press any key to close",
        help_title: "Help",
    },

    notice: NoticeTexts {
        empty_name: "Please enter a name for the item.",
        list_failed: "Error loading items",
        get_failed: "Error loading item for editing",
        create_failed: "Error creating item. Check the connection to the API.",
        update_failed: "Error updating item.",
        delete_failed: "Error deleting item.",
        unreachable: "Error loading items. Check that the API is running.",
    },

    status_bar: StatusBarTexts {
        last_sync: "Synced",
        never_synced: "Not synced",
    },

    help: HelpTexts {
        global: "Global",
        form: "Form",
        list: "List",
        switch_panel: "Switch between form and list",
        reload: "Reload the list",
        show_help: "Show this help",
        quit: "Quit",
        edit_text: "Edit the name",
        submit: "Add or update the item",
        cancel_edit: "Cancel editing",
        select: "Move selection",
        edit: "Edit selected item",
        delete: "Delete selected item",
        close_hint: "Press Esc to close the help",
    },
};
