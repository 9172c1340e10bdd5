#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError
{
    EmptyCoeffTable,
    CoeffTableLengthNotValid,
    StageCountMismatch,
    UnstableFilterCoeffs
}
