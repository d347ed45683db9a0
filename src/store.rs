use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::StoreError;

const CHARACTERS_URL:&'static str="https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/characters.json";
const LOC_URL:&'static str="https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/loc.json";

/// one entry of the character metadata store, keyed by avatar id
#[derive(Clone,Debug,Default,Deserialize)]
pub struct CharacterMeta{
	#[serde(rename="Element",default)]
	pub element:String,
	#[serde(rename="SkillOrder",default)]
	pub skill_order:Vec<u32>,
	#[serde(rename="Skills",default)]
	pub skills:HashMap<String,String>,
	#[serde(rename="ProudMap",default)]
	pub proud_map:HashMap<String,u32>,
	#[serde(rename="NameTextMapHash",default)]
	pub name_text_map_hash:u64,
	#[serde(rename="SideIconName",default)]
	pub side_icon_name:String,
	#[serde(rename="QualityType",default)]
	pub quality_type:String,
}

pub type CharacterStore=HashMap<String,CharacterMeta>;
pub type LocTable=HashMap<String,String>;

/// process-lifetime cache for the two reference tables.
/// each table is populated at most once; concurrent first callers
/// wait on the same in-flight fetch instead of issuing their own.
pub struct StoreCache{
	characters:OnceCell<CharacterStore>,
	loc:OnceCell<LocTable>,
}
impl StoreCache{
	pub fn new()->Self{
		Self{
			characters:OnceCell::new(),
			loc:OnceCell::new(),
		}
	}
	/// cache with both tables already populated, no network access ever happens
	pub fn preloaded(characters:CharacterStore,loc:LocTable)->Self{
		Self{
			characters:OnceCell::new_with(Some(characters)),
			loc:OnceCell::new_with(Some(loc)),
		}
	}
	pub async fn ensure<'a>(&'a self,client:&Client,language:&str)->Result<StoreView<'a>,StoreError>{
		let characters=self.characters.get_or_try_init(||fetch_characters(client));
		let loc=self.loc.get_or_try_init(||fetch_loc(client,language));
		let (characters,loc)=futures::try_join!(characters,loc)?;
		Ok(StoreView{characters,loc})
	}
	pub fn is_loaded(&self)->bool{
		self.characters.initialized()&&self.loc.initialized()
	}
}
impl Default for StoreCache{
	fn default()->Self{
		Self::new()
	}
}

/// read-only borrow of both loaded tables, handed to the assemblers
#[derive(Clone,Copy)]
pub struct StoreView<'a>{
	pub characters:&'a CharacterStore,
	pub loc:&'a LocTable,
}
impl <'a> StoreView<'a>{
	pub fn character(&self,avatar_id:u32)->Option<&'a CharacterMeta>{
		self.characters.get(&avatar_id.to_string())
	}
	pub fn text(&self,hash:impl AsRef<str>)->Option<&'a str>{
		self.loc.get(hash.as_ref()).map(|s|s.as_str())
	}
	pub fn text_or(&self,hash:impl AsRef<str>,default:&'a str)->&'a str{
		self.text(hash).unwrap_or(default)
	}
}

async fn fetch_bytes(client:&Client,url:&str)->Result<Vec<u8>,StoreError>{
	let body=client.get(url).send().await?;
	let body=body.error_for_status()?;
	Ok(body.bytes().await?.to_vec())
}
async fn fetch_characters(client:&Client)->Result<CharacterStore,StoreError>{
	tracing::debug!("fetching character store");
	let body=fetch_bytes(client,CHARACTERS_URL).await?;
	let root:HashMap<String,Value>=serde_json::from_slice(&body)?;
	let mut store=HashMap::with_capacity(root.len());
	for (id,entry) in root{
		match serde_json::from_value::<CharacterMeta>(entry){
			Ok(meta)=>{
				store.insert(id,meta);
			},
			Err(e)=>{
				//characters referencing this entry decode as Unrecognized
				tracing::debug!(id=%id,error=%e,"skipping malformed character store entry");
			}
		}
	}
	Ok(store)
}
async fn fetch_loc(client:&Client,language:&str)->Result<LocTable,StoreError>{
	tracing::debug!(language,"fetching localization table");
	let body=fetch_bytes(client,LOC_URL).await?;
	let mut root:HashMap<String,Value>=serde_json::from_slice(&body)?;
	let lang=root.remove(language).ok_or_else(||StoreError::MissingLanguage(language.to_owned()))?;
	Ok(serde_json::from_value(lang)?)
}

#[cfg(test)]
mod tests{
	use super::*;
	fn sample_cache()->StoreCache{
		let mut characters=HashMap::new();
		characters.insert(String::from("10000002"),CharacterMeta{
			element:String::from("Ice"),
			name_text_map_hash:1533656818,
			..Default::default()
		});
		let mut loc=HashMap::new();
		loc.insert(String::from("1533656818"),String::from("Kamisato Ayaka"));
		StoreCache::preloaded(characters,loc)
	}
	#[test]
	fn preloaded_cache_never_fetches(){
		let cache=sample_cache();
		assert!(cache.is_loaded());
		//closures inside ensure are never polled when both cells are set,
		//so a client with no reachable network is fine here
		let client=Client::new();
		let view=futures::executor::block_on(cache.ensure(&client,"en")).unwrap();
		assert_eq!(view.character(10000002).unwrap().element,"Ice");
		assert!(view.character(99999999).is_none());
		assert_eq!(view.text("1533656818"),Some("Kamisato Ayaka"));
		assert_eq!(view.text_or("0","fallback"),"fallback");
	}
}
