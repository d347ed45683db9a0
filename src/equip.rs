use std::collections::BTreeMap;

use serde::Serialize;

use crate::fight_prop::BASE_ATTACK_PROP;
use crate::{format_stat_value, stat_display_name, RawEquip, RawItemStat, StoreView};

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedWeapon{
	pub name:String,
	pub rarity:u8,
	pub level:u8,
	pub ascension:u8,
	pub refinement:u8,
	pub base_atk:i64,
	pub sub_stat:Option<WeaponSubStat>,
	pub icon_url:String,
}

#[derive(Clone,Debug,Serialize)]
pub struct WeaponSubStat{
	pub name:String,
	pub value:f64,
}

#[derive(Clone,Debug,Serialize)]
pub struct StatLine{
	pub name:String,
	pub value:String,
}

#[derive(Clone,Copy,Debug,Eq,PartialEq,Serialize)]
#[serde(rename_all="lowercase")]
pub enum ArtifactSlot{
	Flower,
	Feather,
	Sands,
	Goblet,
	Circlet,
	Unknown,
}
impl ArtifactSlot{
	pub fn parse(equip_type:&str)->Self{
		match equip_type{
			"EQUIP_BRACER"=>Self::Flower,
			"EQUIP_NECKLACE"=>Self::Feather,
			"EQUIP_SHOES"=>Self::Sands,
			"EQUIP_RING"=>Self::Goblet,
			"EQUIP_DRESS"=>Self::Circlet,
			_=>Self::Unknown,
		}
	}
	pub fn key(&self)->&'static str{
		match self{
			Self::Flower=>"flower",
			Self::Feather=>"feather",
			Self::Sands=>"sands",
			Self::Goblet=>"goblet",
			Self::Circlet=>"circlet",
			Self::Unknown=>"unknown",
		}
	}
	pub fn label_th(&self)->&'static str{
		match self{
			Self::Flower=>"ดอกไม้",
			Self::Feather=>"ขนนก",
			Self::Sands=>"นาฬิกาทราย",
			Self::Goblet=>"ถ้วย",
			Self::Circlet=>"มงกุฎ",
			Self::Unknown=>"",
		}
	}
}

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedArtifact{
	pub name:String,
	pub set_name:String,
	pub slot:ArtifactSlot,
	pub slot_label:String,
	pub rarity:u8,
	pub level:u8,
	pub main_stat:StatLine,
	pub sub_stats:Vec<StatLine>,
	pub icon_url:String,
}

/// affix values are stored zero-based: a fresh weapon has no affix entry
/// and is refinement 1. do not conflate with artifact_display_level.
pub(crate) fn weapon_refinement(affix_map:&BTreeMap<String,u8>)->u8{
	match affix_map.values().next(){
		Some(v)=>v+1,
		None=>1,
	}
}

/// reliquary levels are stored one-based, display uses the upgrade counter.
/// do not conflate with weapon_refinement.
pub(crate) fn artifact_display_level(stored:u8)->u8{
	stored.saturating_sub(1)
}

pub fn parse_weapon(equip:&RawEquip,store:&StoreView)->ParsedWeapon{
	let flat=&equip.flat;
	let (level,ascension,refinement)=match &equip.weapon{
		Some(w)=>(if w.level==0{1}else{w.level},w.promote_level,weapon_refinement(&w.affix_map)),
		None=>(1,0,1),
	};
	let mut base_atk=0;
	let mut sub_stat=None;
	if let Some(stats)=&flat.weapon_stats{
		for stat in stats{
			let prop_id=stat.prop_id();
			if prop_id==BASE_ATTACK_PROP{
				base_atk=stat.stat_value.round() as i64;
			}else{
				//weapons carry at most one non-base entry; last one wins if not
				sub_stat=Some(WeaponSubStat{
					name:stat_display_name(prop_id).into_owned(),
					value:stat.stat_value,
				});
			}
		}
	}
	ParsedWeapon{
		name:store.text_or(&flat.name_text_map_hash,"Unknown Weapon").to_owned(),
		rarity:flat.rank_level,
		level,
		ascension,
		refinement,
		base_atk,
		sub_stat,
		icon_url:crate::ui_url(&flat.icon),
	}
}

pub fn parse_artifact(equip:&RawEquip,store:&StoreView)->ParsedArtifact{
	let flat=&equip.flat;
	let set_name=match &flat.set_name_text_map_hash{
		Some(hash)=>store.text_or(hash,"").to_owned(),
		None=>String::new(),
	};
	let equip_type=flat.equip_type.as_deref().unwrap_or("");
	let slot=ArtifactSlot::parse(equip_type);
	let slot_label=match slot{
		ArtifactSlot::Unknown=>equip_type.to_owned(),
		_=>slot.label_th().to_owned(),
	};
	let main_stat=match &flat.reliquary_mainstat{
		Some(stat)=>stat_line(stat),
		None=>StatLine{name:String::new(),value:String::new()},
	};
	let mut sub_stats=vec![];
	if let Some(subs)=&flat.reliquary_substats{
		for stat in subs{
			sub_stats.push(stat_line(stat));
		}
	}
	ParsedArtifact{
		name:store.text_or(&flat.name_text_map_hash,"Unknown Artifact").to_owned(),
		set_name,
		slot,
		slot_label,
		rarity:flat.rank_level,
		level:artifact_display_level(equip.reliquary.map(|r|r.level).unwrap_or(1)),
		main_stat,
		sub_stats,
		icon_url:crate::ui_url(&flat.icon),
	}
}

fn stat_line(stat:&RawItemStat)->StatLine{
	let prop_id=stat.prop_id();
	StatLine{
		name:stat_display_name(prop_id).into_owned(),
		value:format_stat_value(prop_id,stat.stat_value),
	}
}

#[cfg(test)]
mod tests{
	use std::collections::HashMap;
	use super::*;
	use crate::{CharacterStore, LocTable};
	fn store_with(loc:&[(&str,&str)])->(CharacterStore,LocTable){
		let mut table=HashMap::new();
		for (k,v) in loc{
			table.insert(k.to_string(),v.to_string());
		}
		(HashMap::new(),table)
	}
	fn view<'a>(characters:&'a CharacterStore,loc:&'a LocTable)->StoreView<'a>{
		StoreView{characters,loc}
	}
	fn equip(json:serde_json::Value)->RawEquip{
		serde_json::from_value(json).unwrap()
	}
	#[test]
	fn refinement_is_stored_affix_plus_one(){
		for stored in 0..=4u8{
			let mut affix=BTreeMap::new();
			affix.insert(String::from("111404"),stored);
			assert_eq!(weapon_refinement(&affix),stored+1);
		}
		assert_eq!(weapon_refinement(&BTreeMap::new()),1);
	}
	#[test]
	fn artifact_level_is_stored_minus_one(){
		assert_eq!(artifact_display_level(1),0);
		assert_eq!(artifact_display_level(21),20);
		assert_eq!(artifact_display_level(0),0);
	}
	#[test]
	fn weapon_decodes_base_atk_and_substat(){
		let (characters,loc)=store_with(&[("2666951267","Mistsplitter Reforged")]);
		let equip=equip(serde_json::json!({
			"itemId":11509,
			"weapon":{"level":90,"promoteLevel":6,"affixMap":{"111509":4}},
			"flat":{
				"itemType":"ITEM_WEAPON",
				"nameTextMapHash":"2666951267",
				"rankLevel":5,
				"icon":"UI_EquipIcon_Sword_Narukami",
				"weaponStats":[
					{"appendPropId":"FIGHT_PROP_BASE_ATTACK","statValue":674.0},
					{"appendPropId":"FIGHT_PROP_CRITICAL_HURT","statValue":0.441}
				]
			}
		}));
		let weapon=parse_weapon(&equip,&view(&characters,&loc));
		assert_eq!(weapon.name,"Mistsplitter Reforged");
		assert_eq!(weapon.refinement,5);
		assert_eq!(weapon.base_atk,674);
		assert_eq!(weapon.level,90);
		assert_eq!(weapon.ascension,6);
		let sub=weapon.sub_stat.unwrap();
		assert_eq!(sub.name,"ดาเมจคริ");
		assert_eq!(sub.value,0.441);
	}
	#[test]
	fn weapon_without_affix_map_is_refinement_one(){
		let (characters,loc)=store_with(&[]);
		let equip=equip(serde_json::json!({
			"itemId":11101,
			"weapon":{"level":1},
			"flat":{
				"itemType":"ITEM_WEAPON",
				"nameTextMapHash":"0",
				"rankLevel":1,
				"icon":"UI_EquipIcon_Sword_Blunt",
				"weaponStats":[{"appendPropId":"FIGHT_PROP_BASE_ATTACK","statValue":23.0}]
			}
		}));
		let weapon=parse_weapon(&equip,&view(&characters,&loc));
		assert_eq!(weapon.name,"Unknown Weapon");
		assert_eq!(weapon.refinement,1);
		assert!(weapon.sub_stat.is_none());
	}
	#[test]
	fn weapon_substat_last_entry_wins(){
		let (characters,loc)=store_with(&[]);
		let equip=equip(serde_json::json!({
			"itemId":11405,
			"weapon":{"level":90},
			"flat":{
				"itemType":"ITEM_WEAPON",
				"nameTextMapHash":"0",
				"rankLevel":4,
				"icon":"UI_EquipIcon_Sword",
				"weaponStats":[
					{"appendPropId":"FIGHT_PROP_BASE_ATTACK","statValue":510.0},
					{"appendPropId":"FIGHT_PROP_ATTACK_PERCENT","statValue":0.413},
					{"appendPropId":"FIGHT_PROP_CHARGE_EFFICIENCY","statValue":0.459}
				]
			}
		}));
		let weapon=parse_weapon(&equip,&view(&characters,&loc));
		assert_eq!(weapon.sub_stat.unwrap().name,"ฟื้นฟูพลังงาน");
	}
	#[test]
	fn artifact_decodes_slot_level_and_stats(){
		let (characters,loc)=store_with(&[
			("3914045794","Gladiator's Nostalgia"),
			("147298547","Gladiator's Finale"),
		]);
		let equip=equip(serde_json::json!({
			"itemId":81524,
			"reliquary":{"level":21},
			"flat":{
				"itemType":"ITEM_RELIQUARY",
				"nameTextMapHash":"3914045794",
				"setNameTextMapHash":"147298547",
				"rankLevel":5,
				"icon":"UI_RelicIcon_15001_4",
				"equipType":"EQUIP_BRACER",
				"reliquaryMainstat":{"mainPropId":"FIGHT_PROP_HP","statValue":4780.0},
				"reliquarySubstats":[
					{"appendPropId":"FIGHT_PROP_CRITICAL","statValue":0.066},
					{"appendPropId":"FIGHT_PROP_ELEMENT_MASTERY","statValue":39.69}
				]
			}
		}));
		let artifact=parse_artifact(&equip,&view(&characters,&loc));
		assert_eq!(artifact.name,"Gladiator's Nostalgia");
		assert_eq!(artifact.set_name,"Gladiator's Finale");
		assert_eq!(artifact.slot,ArtifactSlot::Flower);
		assert_eq!(artifact.slot.key(),"flower");
		assert_eq!(artifact.slot_label,"ดอกไม้");
		assert_eq!(artifact.level,20);
		assert_eq!(artifact.main_stat.name,"HP");
		assert_eq!(artifact.main_stat.value,"4,780");
		assert_eq!(artifact.sub_stats[0].value,"6.6%");
		assert_eq!(artifact.sub_stats[1].value,"40");
	}
	#[test]
	fn unknown_slot_still_decodes(){
		let (characters,loc)=store_with(&[]);
		let equip=equip(serde_json::json!({
			"itemId":1,
			"reliquary":{"level":5},
			"flat":{
				"itemType":"ITEM_RELIQUARY",
				"nameTextMapHash":"0",
				"rankLevel":4,
				"icon":"UI_RelicIcon_X",
				"equipType":"EQUIP_SOMETHING_NEW"
			}
		}));
		let artifact=parse_artifact(&equip,&view(&characters,&loc));
		assert_eq!(artifact.slot,ArtifactSlot::Unknown);
		assert_eq!(artifact.slot.key(),"unknown");
		assert_eq!(artifact.slot_label,"EQUIP_SOMETHING_NEW");
		assert_eq!(artifact.level,4);
		assert_eq!(artifact.name,"Unknown Artifact");
		assert_eq!(artifact.set_name,"");
	}
}
