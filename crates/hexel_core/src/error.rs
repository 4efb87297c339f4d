use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error(
        "no hex values found in the input; expected an array of `0x`-prefixed \
         RGB565 values, e.g. `const uint16_t image[] = {{0xF800, 0x07E0, ...}}`"
    )]
    NoHexValuesFound,

    #[error("hex tokens were found but none parsed as 16-bit RGB565 values")]
    NoValidHexValues,
}

pub type Result<T> = std::result::Result<T, CoreError>;
