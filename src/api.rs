use std::sync::Arc;

use reqwest::{header::HeaderMap, Client, ClientBuilder, StatusCode};

use crate::{parse_player, ParsedPlayer, RawPlayerResponse, ShowcaseError, StoreCache, StoreView};

/// client for the enka.network player API plus the reference store cache.
/// clones share the same cache, so the stores are fetched once per process.
#[derive(Clone)]
pub struct ShowcaseClient{
	client:Client,
	header:Option<Arc<HeaderMap>>,
	store:Arc<StoreCache>,
	language:String,
}
impl ShowcaseClient{
	#[cfg(not(target_arch = "wasm32"))]
	fn client_builder()->ClientBuilder{
		Client::builder().timeout(std::time::Duration::from_secs(30)).user_agent(crate::USER_AGENT)
	}
	#[cfg(target_arch = "wasm32")]
	fn client_builder()->ClientBuilder{
		Client::builder()
	}
	pub fn new()->Result<Self,ShowcaseError>{
		let client=Self::client_builder().build().map_err(ShowcaseError::Request)?;
		Ok(Self::from(client,StoreCache::new()))
	}
	pub fn from(client:Client,store:StoreCache)->Self{
		Self{
			client,
			header:None,
			store:Arc::new(store),
			language:String::from("en"),
		}
	}
	pub fn set_header(&mut self,header:Option<HeaderMap>){
		self.header=header.map(Arc::new);
	}
	/// language block used for all localization lookups, default "en"
	pub fn set_language(&mut self,language:impl Into<String>){
		self.language=language.into();
	}
	pub fn language(&self)->&str{
		&self.language
	}
	pub fn store(&self)->&Arc<StoreCache>{
		&self.store
	}
	/// populate both reference tables if needed and borrow them.
	/// a fetch failure here is fatal to the request, there is no degraded mode.
	pub async fn ensure_store(&self)->Result<StoreView<'_>,ShowcaseError>{
		Ok(self.store.ensure(&self.client,&self.language).await?)
	}
	pub async fn fetch_raw(&self,uid:i32)->Result<RawPlayerResponse,ShowcaseError>{
		tracing::debug!(uid,"fetching player payload");
		let mut request=self.client.get(format!("https://enka.network/api/uid/{}/",uid));
		if let Some(header)=&self.header{
			request=request.headers(header.as_ref().clone());
		}
		let response=request.send().await.map_err(ShowcaseError::Request)?;
		if response.status()==StatusCode::NOT_FOUND{
			return Err(ShowcaseError::PlayerNotFound(uid));
		}
		let response=response.error_for_status().map_err(ShowcaseError::Request)?;
		let body=response.bytes().await.map_err(ShowcaseError::Request)?;
		Ok(serde_json::from_slice(&body)?)
	}
	/// single entry point: raw payload in, normalized player view out
	pub async fn fetch_player(&self,uid:i32)->Result<ParsedPlayer,ShowcaseError>{
		let raw=self.fetch_raw(uid).await?;
		let store=self.store.ensure(&self.client,&self.language).await?;
		Ok(parse_player(&raw,&store))
	}
}
