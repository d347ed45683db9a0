use serde::Serialize;

use crate::fight_prop::parse_stats;
use crate::{parse_artifact, parse_weapon, CharacterMeta, ParsedArtifact, ParsedStats, ParsedWeapon, RawAvatarInfo, StoreView};

#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum Element{
	Pyro,
	Hydro,
	Anemo,
	Electro,
	Dendro,
	Cryo,
	Geo,
}
impl Element{
	/// closed mapping from the store's internal element codes
	pub fn from_store_code(code:&str)->Option<Self>{
		Some(match code{
			"Fire"=>Self::Pyro,
			"Water"=>Self::Hydro,
			"Wind"=>Self::Anemo,
			"Electric"=>Self::Electro,
			"Grass"=>Self::Dendro,
			"Ice"=>Self::Cryo,
			"Rock"=>Self::Geo,
			_=>return None,
		})
	}
	pub fn name(&self)->&'static str{
		match self{
			Self::Pyro=>"Pyro",
			Self::Hydro=>"Hydro",
			Self::Anemo=>"Anemo",
			Self::Electro=>"Electro",
			Self::Dendro=>"Dendro",
			Self::Cryo=>"Cryo",
			Self::Geo=>"Geo",
		}
	}
}

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedCharacter{
	pub avatar_id:u32,
	pub name:String,
	pub element:String,
	pub rarity:u8,
	pub level:u32,
	pub ascension:u8,
	pub friendship:u8,
	pub constellations:u8,
	pub icon_url:String,
	pub side_icon_url:String,
	pub stats:ParsedStats,
	pub skills:Vec<ParsedSkill>,
	pub weapon:Option<ParsedWeapon>,
	pub artifacts:Vec<ParsedArtifact>,
}

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedSkill{
	pub id:u32,
	pub level:u8,
	pub extra_level:u8,
	pub icon_url:String,
}

/// outcome of decoding one showcased character.
/// Unrecognized is the expected path for avatar ids newer than the store,
/// it is not an error and never aborts the request.
#[derive(Clone,Debug)]
pub enum CharacterParse{
	Recognized(ParsedCharacter),
	Unrecognized(u32),
}

pub fn parse_character(avatar:&RawAvatarInfo,store:&StoreView)->CharacterParse{
	let meta=match store.character(avatar.avatar_id){
		Some(meta)=>meta,
		None=>return CharacterParse::Unrecognized(avatar.avatar_id),
	};
	let name=match store.text(meta.name_text_map_hash.to_string()){
		Some(name)=>name.to_owned(),
		None=>format!("Character {}",avatar.avatar_id),
	};
	let element=match Element::from_store_code(&meta.element){
		Some(e)=>e.name().to_owned(),
		None=>meta.element.clone(),
	};
	let rarity=if meta.quality_type=="QUALITY_ORANGE"||meta.quality_type=="QUALITY_ORANGE_SP"{5}else{4};
	let mut weapon=None;
	let mut artifacts=vec![];
	for equip in &avatar.equip_list{
		match equip.flat.item_type.as_str(){
			"ITEM_WEAPON"=>weapon=Some(parse_weapon(equip,store)),
			"ITEM_RELIQUARY"=>artifacts.push(parse_artifact(equip,store)),
			_=>{}
		}
	}
	let icon_name=meta.side_icon_name.replace("_Side","");
	CharacterParse::Recognized(ParsedCharacter{
		avatar_id:avatar.avatar_id,
		name,
		element,
		rarity,
		level:avatar.prop("4001"),
		ascension:avatar.prop("1002") as u8,
		friendship:avatar.fetter_info.map(|f|f.exp_level).unwrap_or(0),
		constellations:avatar.talent_id_list.len() as u8,
		icon_url:crate::ui_url(icon_name),
		side_icon_url:crate::ui_url(&meta.side_icon_name),
		stats:parse_stats(avatar),
		skills:parse_skills(avatar,meta),
		weapon,
		artifacts,
	})
}

fn parse_skills(avatar:&RawAvatarInfo,meta:&CharacterMeta)->Vec<ParsedSkill>{
	let mut skills=Vec::with_capacity(meta.skill_order.len());
	for skill_id in &meta.skill_order{
		let key=skill_id.to_string();
		let level=avatar.skill_level_map.get(&key).copied().unwrap_or(0);
		//constellation upgrades add to the base level, they never replace it
		let extra_level=meta.proud_map.get(&key)
			.and_then(|proud_id|avatar.proud_skill_extra_level_map.get(&proud_id.to_string()))
			.copied()
			.unwrap_or(0);
		let icon_url=match meta.skills.get(&key){
			Some(icon)=>crate::ui_url(icon),
			None=>String::new(),
		};
		skills.push(ParsedSkill{
			id:*skill_id,
			level,
			extra_level,
			icon_url,
		});
	}
	skills
}
