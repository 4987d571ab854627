//! Named locator strategies for common page constructs.

use crate::locator::strategy::LocatorTemplate;

// Basic page constructs

pub static ID: LocatorTemplate =
    LocatorTemplate::new("element with id={0}", "//*[normalize-space(@id)='{0}']");

pub static LINK: LocatorTemplate = LocatorTemplate::new("link={0}", "link={0}");

pub static ALT: LocatorTemplate =
    LocatorTemplate::new("alt={0}", "//*[normalize-space(@alt)='{0}']");

pub static NAME: LocatorTemplate =
    LocatorTemplate::new("name={0}", "//*[normalize-space(@name)='{0}']");

pub static TITLE: LocatorTemplate =
    LocatorTemplate::new("title={0}", "//*[normalize-space(@title)='{0}']");

pub static CSS_CLASS: LocatorTemplate =
    LocatorTemplate::new("class={0}", "//*[normalize-space(@class)='{0}']");

pub static BUTTON: LocatorTemplate = LocatorTemplate::new("button={0}", "//*[@value='{0}']");

pub static ROW_WITH_TWO_ELEMENTS: LocatorTemplate = LocatorTemplate::new(
    "table row containing '{0}' and '{1}'",
    "//*[self::tr]/*[self::td and (normalize-space(.)='{0}' or normalize-space(.)='{0} *' or contains(.,'{0}'))]/../*[self::td and (normalize-space(.)='{1}' or normalize-space(.)='{1} *' or contains(.,'{1}'))]/..",
);

// Editable wiki tables

pub static TABLE_CELL: LocatorTemplate = LocatorTemplate::new(
    "table cell with text={0}",
    "//*[self::tr]/*[self::td and (normalize-space(.)='{0}' or normalize-space(.)='{0} *' or contains(.,'{0}'))]",
);

pub static TABLE_EDIT_BUTTON: LocatorTemplate = LocatorTemplate::new(
    "edit button for table containing cell with text={0}",
    "//*[self::tr]/*[self::td and (normalize-space(.)='{0}' or normalize-space(.)='{0} *' or contains(.,'{0}'))]/../../../../*[self::input and normalize-space(@class)='editTableEditImageButton']",
);

pub static TABLE_ROW_DELETE_BUTTON: LocatorTemplate = LocatorTemplate::new(
    "delete button for table row containing text={0}",
    "//*[self::input and normalize-space(@value)='{0}']/../../*[self::td and normalize-space(@class)='editTableActionCell'][2]/*[self::img]",
);

pub static TABLE_SAVE_BUTTON: LocatorTemplate = LocatorTemplate::new(
    "save button for table containing table row containing text={0}",
    "//*[self::input and normalize-space(@value)='{0}']/../../../../../*[self::input and normalize-space(@id)='etsave']",
);

pub static CHECKBOX_NEXT_TO_TEXT: LocatorTemplate = LocatorTemplate::new(
    "checkbox next to text={0}",
    "//*[(self::td or contains(@class,'dr-table-cell')) and normalize-space(.)='{0}']/..//*[@type='checkbox']",
);

static ALL: [(&str, &LocatorTemplate); 13] = [
    ("id", &ID),
    ("link", &LINK),
    ("alt", &ALT),
    ("name", &NAME),
    ("title", &TITLE),
    ("css_class", &CSS_CLASS),
    ("button", &BUTTON),
    ("row_with_two_elements", &ROW_WITH_TWO_ELEMENTS),
    ("table_cell", &TABLE_CELL),
    ("table_edit_button", &TABLE_EDIT_BUTTON),
    ("table_row_delete_button", &TABLE_ROW_DELETE_BUTTON),
    ("table_save_button", &TABLE_SAVE_BUTTON),
    ("checkbox_next_to_text", &CHECKBOX_NEXT_TO_TEXT),
];

/// Every named strategy, in declaration order.
pub fn all() -> &'static [(&'static str, &'static LocatorTemplate)] {
    &ALL
}

pub fn lookup(name: &str) -> Option<&'static LocatorTemplate> {
    ALL.iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, strategy)| *strategy)
}
