/// Opaque per-machine identity used to join the two inventory sources.
/// Treated as an atomic key and never decoded.
/// Example: `e6c1f0b2a9d84c11`
pub type WorkstationKey = String;
/// Canonical organizational-unit identifier normalized from tag encodings.
/// Examples: `NRCS`, `FSA`, `ARS`
pub type AgencyId = String;
/// Column name in an input table or report.
/// Examples: `Encrypted Workstation Name`, `Asset - Custom Tags.2.1`
pub type ColumnName = String;
/// Operating-system descriptor carried through reports untouched.
/// Examples: `Windows 10 Enterprise`, `Windows Server 2019`
pub type OsDescriptor = String;
/// Canonical, order-independent rendering of an agency value set.
/// Examples: `FSA`, `ARS-FSA`, `None`
pub type RenderedAgencies = String;
