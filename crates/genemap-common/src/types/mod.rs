//! Common types used across genemap

/// A single identifier mapping produced by a remote service.
///
/// One record per match. A source identifier with no match produces zero
/// records (query-based services) or one record with an empty `target_id`
/// (the UniProt form endpoint, which always returns a body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    /// Identifier in the source namespace (e.g. "MGI:1918911")
    pub source_id: String,

    /// Gene symbol, when the service reports one
    pub symbol: Option<String>,

    /// Identifier in the target namespace; empty string means no match
    pub target_id: String,
}

impl MappingRecord {
    /// Create a record without a symbol column
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            symbol: None,
            target_id: target_id.into(),
        }
    }

    /// Create a record carrying a gene symbol
    pub fn with_symbol(
        source_id: impl Into<String>,
        symbol: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            symbol: Some(symbol.into()),
            target_id: target_id.into(),
        }
    }
}

/// Ordered CSV column names for a namespace pair.
///
/// The symbol column is optional; services that do not report gene symbols
/// omit it from their output entirely rather than writing an empty column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Header name for the source identifier column
    pub source: &'static str,

    /// Header name for the symbol column, if the service reports symbols
    pub symbol: Option<&'static str>,

    /// Header name for the target identifier column
    pub target: &'static str,
}

impl TableSchema {
    /// MGI -> NCBI/Entrez gene mapping columns
    pub const MGI: TableSchema = TableSchema {
        source: "MGIID",
        symbol: Some("symbol"),
        target: "NCBIGeneNumber",
    };

    /// UniProt accession -> Entrez gene mapping columns
    pub const UNIPROT: TableSchema = TableSchema {
        source: "UniProtID",
        symbol: None,
        target: "EntrezID",
    };

    /// Column names in output order
    pub fn header(&self) -> Vec<&'static str> {
        match self.symbol {
            Some(symbol) => vec![self.source, symbol, self.target],
            None => vec![self.source, self.target],
        }
    }

    /// Number of columns in this schema
    pub fn column_count(&self) -> usize {
        if self.symbol.is_some() {
            3
        } else {
            2
        }
    }
}

/// An ordered collection of mapping records with a fixed column schema.
///
/// Insertion order is processing order. There is no uniqueness constraint on
/// `source_id`; one identifier may yield several symbol/target pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    schema: TableSchema,
    records: Vec<MappingRecord>,
}

impl MappingTable {
    /// Create an empty table for the given schema
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Create a table from already-collected records
    pub fn from_records(schema: TableSchema, records: Vec<MappingRecord>) -> Self {
        Self { schema, records }
    }

    /// The table's column schema
    pub fn schema(&self) -> TableSchema {
        self.schema
    }

    /// Append one record
    pub fn push(&mut self, record: MappingRecord) {
        self.records.push(record);
    }

    /// Append all records, preserving their order
    pub fn extend(&mut self, records: impl IntoIterator<Item = MappingRecord>) {
        self.records.extend(records);
    }

    /// Records in insertion order
    pub fn records(&self) -> &[MappingRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
