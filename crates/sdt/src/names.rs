//! WordprocessingML element and attribute names emitted by this crate.
//!
//! Consuming applications reject documents with misspelled names without
//! reporting why, so every name is spelled exactly once, here.

// Structured document tag skeleton
pub const SDT: &str = "w:sdt";
pub const SDT_PR: &str = "w:sdtPr";
pub const SDT_CONTENT: &str = "w:sdtContent";

// Shared properties
pub const ALIAS: &str = "w:alias";
pub const TAG: &str = "w:tag";
pub const ID: &str = "w:id";
pub const APPEARANCE: &str = "w15:appearance";
pub const COLOR: &str = "w15:color";
pub const DATA_BINDING: &str = "w:dataBinding";
pub const LOCK: &str = "w:lock";
pub const SHOWING_PLACEHOLDER: &str = "w:showingPlcHdr";

// Payload discriminators
pub const PLAIN_TEXT: &str = "w:text";
pub const RICH_TEXT: &str = "w:richText";
pub const DROP_DOWN_LIST: &str = "w:dropDownList";
pub const COMBO_BOX: &str = "w:comboBox";
pub const LIST_ITEM: &str = "w:listItem";
pub const DATE: &str = "w:date";
pub const DATE_FORMAT: &str = "w:dateFormat";
pub const LANGUAGE_ID: &str = "w:lid";
pub const STORE_MAPPED_DATA_AS: &str = "w:storeMappedDataAs";
pub const CALENDAR: &str = "w:calendar";

// Checkbox payload (Word 2010 namespace)
pub const CHECKBOX: &str = "w14:checkbox";
pub const CHECKED: &str = "w14:checked";
pub const CHECKED_STATE: &str = "w14:checkedState";
pub const UNCHECKED_STATE: &str = "w14:uncheckedState";
pub const W14_VAL: &str = "w14:val";
pub const W14_FONT: &str = "w14:font";

// Run and block content
pub const PARAGRAPH: &str = "w:p";
pub const PARAGRAPH_PR: &str = "w:pPr";
pub const PARAGRAPH_STYLE: &str = "w:pStyle";
pub const RUN: &str = "w:r";
pub const RUN_PR: &str = "w:rPr";
pub const RUN_STYLE: &str = "w:rStyle";
pub const RUN_FONTS: &str = "w:rFonts";
pub const TEXT: &str = "w:t";
pub const BREAK: &str = "w:br";
pub const TABLE: &str = "w:tbl";
pub const TABLE_ROW: &str = "w:tr";
pub const TABLE_CELL: &str = "w:tc";

// Attributes
pub const VAL: &str = "w:val";
pub const W15_VAL: &str = "w15:val";
pub const XPATH: &str = "w:xpath";
pub const STORE_ITEM_ID: &str = "w:storeItemID";
pub const PREFIX_MAPPINGS: &str = "w:prefixMappings";
pub const DISPLAY_TEXT: &str = "w:displayText";
pub const VALUE: &str = "w:value";
pub const MULTI_LINE: &str = "w:multiLine";
pub const MAX_LENGTH: &str = "w:maxLength";
pub const FULL_DATE: &str = "w:fullDate";
pub const ASCII: &str = "w:ascii";
pub const EAST_ASIA: &str = "w:eastAsia";
pub const H_ANSI: &str = "w:hAnsi";
pub const XML_SPACE: &str = "xml:space";
