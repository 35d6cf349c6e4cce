use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("I/O error while writing markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quick-XML error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("Written markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
