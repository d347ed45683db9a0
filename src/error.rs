use thiserror::Error;

/// failures while fetching or decoding the reference stores.
/// these abort the whole parse, there is no partial or stale fallback.
#[derive(Debug,Error)]
pub enum StoreError{
	#[error("store fetch failed: {0}")]
	Fetch(#[from] reqwest::Error),
	#[error("store decode failed: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("localization table has no \"{0}\" language block")]
	MissingLanguage(String),
}

#[derive(Debug,Error)]
pub enum ShowcaseError{
	#[error("player request failed: {0}")]
	Request(#[source] reqwest::Error),
	#[error("player {0} not found")]
	PlayerNotFound(i32),
	#[error("malformed player payload: {0}")]
	Payload(#[from] serde_json::Error),
	#[error("reference data unavailable: {0}")]
	Store(#[from] StoreError),
}
