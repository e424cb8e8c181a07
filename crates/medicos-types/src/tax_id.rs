//! CUIL/CUIT tax identifier type.
//!
//! A CUIL/CUIT is the 11-digit Argentine tax identifier. It is the lookup key
//! of the roster and is kept as text so leading zeros survive.

/// A CUIL/CUIT tax identifier.
///
/// Always compared as text. Well-formed values are exactly
/// [`TAX_ID_LEN`](crate::limits::TAX_ID_LEN) ASCII digits.
///
/// # Examples
///
/// ```
/// use medicos_types::TaxId;
///
/// let tax_id: TaxId = "20123456789".to_string();
/// assert_eq!(tax_id.len(), 11);
/// ```
pub type TaxId = String;
