#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Zero based line number within a maze map file, counted from the top.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct LineIndex(pub usize);
/// Zero based character column within a maze map line.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);
