// Defaults shared by the CLI and the client layer

/// Vector dimensionality used when `vector_size` is omitted on the command line.
pub const DEFAULT_VECTOR_SIZE: u64 = 1536;
/// Endpoint profile used when the configuration does not name a preferred one.
pub const DEFAULT_ENDPOINT_NAME: &str = "qdrant_local";
/// Collection name used when neither the command line nor the endpoint names one.
pub const DEFAULT_COLLECTION_NAME: &str = "nlweb_collection";
/// gRPC URL of a Qdrant instance running on the local machine.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";
