use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// raw enka.network payload for one uid.
/// all optional fields default here, at the deserialization boundary.
#[derive(Clone,Debug,Deserialize)]
pub struct RawPlayerResponse{
	#[serde(default)]
	pub uid:String,
	#[serde(rename="playerInfo")]
	pub player_info:RawPlayerInfo,
	#[serde(rename="avatarInfoList",default)]
	pub avatar_info_list:Vec<RawAvatarInfo>,
}

#[derive(Clone,Debug,Default,Deserialize)]
pub struct RawPlayerInfo{
	#[serde(default)]
	pub nickname:String,
	#[serde(default)]
	pub level:u8,
	#[serde(default)]
	pub signature:String,
	#[serde(rename="worldLevel",default)]
	pub world_level:u8,
	#[serde(rename="finishAchievementNum",default)]
	pub achievements:u32,
	#[serde(rename="towerFloorIndex")]
	pub tower_floor_index:Option<u8>,
	#[serde(rename="towerLevelIndex")]
	pub tower_level_index:Option<u8>,
	#[serde(rename="profilePicture")]
	pub profile_picture:Option<RawProfilePicture>,
}

#[derive(Clone,Copy,Debug,Default,Deserialize)]
pub struct RawProfilePicture{
	#[serde(rename="avatarId",default)]
	pub avatar_id:u32,
}

#[derive(Clone,Debug,Deserialize)]
pub struct RawAvatarInfo{
	#[serde(rename="avatarId")]
	pub avatar_id:u32,
	#[serde(rename="propMap",default)]
	pub prop_map:HashMap<String,RawProp>,
	#[serde(rename="fightPropMap",default)]
	pub fight_prop_map:HashMap<String,f64>,
	#[serde(rename="talentIdList",default)]
	pub talent_id_list:Vec<u32>,
	#[serde(rename="skillLevelMap",default)]
	pub skill_level_map:HashMap<String,u8>,
	#[serde(rename="proudSkillExtraLevelMap",default)]
	pub proud_skill_extra_level_map:HashMap<String,u8>,
	#[serde(rename="fetterInfo")]
	pub fetter_info:Option<RawFetterInfo>,
	#[serde(rename="equipList",default)]
	pub equip_list:Vec<RawEquip>,
}
impl RawAvatarInfo{
	/// leveling property by numeric key, values arrive as strings
	pub(crate) fn prop(&self,key:&str)->u32{
		self.prop_map.get(key)
			.and_then(|p|p.val.as_deref())
			.and_then(|v|v.parse().ok())
			.unwrap_or(0)
	}
	pub(crate) fn fight_prop(&self,key:&str)->f64{
		self.fight_prop_map.get(key).copied().unwrap_or(0.0)
	}
}

#[derive(Clone,Debug,Default,Deserialize)]
pub struct RawProp{
	pub val:Option<String>,
}

#[derive(Clone,Copy,Debug,Default,Deserialize)]
pub struct RawFetterInfo{
	#[serde(rename="expLevel",default)]
	pub exp_level:u8,
}

#[derive(Clone,Debug,Deserialize)]
pub struct RawEquip{
	#[serde(rename="itemId",default)]
	pub item_id:u32,
	pub weapon:Option<RawWeaponDetail>,
	pub reliquary:Option<RawReliquaryDetail>,
	pub flat:RawFlat,
}

#[derive(Clone,Debug,Default,Deserialize)]
pub struct RawWeaponDetail{
	#[serde(default)]
	pub level:u8,
	#[serde(rename="promoteLevel",default)]
	pub promote_level:u8,
	//BTreeMap so "first entry" is deterministic
	#[serde(rename="affixMap",default)]
	pub affix_map:BTreeMap<String,u8>,
}

#[derive(Clone,Copy,Debug,Default,Deserialize)]
pub struct RawReliquaryDetail{
	#[serde(default)]
	pub level:u8,
}

#[derive(Clone,Debug,Default,Deserialize)]
pub struct RawFlat{
	#[serde(rename="itemType",default)]
	pub item_type:String,
	#[serde(rename="nameTextMapHash",default)]
	pub name_text_map_hash:String,
	#[serde(rename="setNameTextMapHash")]
	pub set_name_text_map_hash:Option<String>,
	#[serde(rename="rankLevel",default)]
	pub rank_level:u8,
	#[serde(default)]
	pub icon:String,
	#[serde(rename="equipType")]
	pub equip_type:Option<String>,
	#[serde(rename="weaponStats")]
	pub weapon_stats:Option<Vec<RawItemStat>>,
	#[serde(rename="reliquaryMainstat")]
	pub reliquary_mainstat:Option<RawItemStat>,
	#[serde(rename="reliquarySubstats")]
	pub reliquary_substats:Option<Vec<RawItemStat>>,
}

#[derive(Clone,Debug,Default,Deserialize)]
pub struct RawItemStat{
	#[serde(rename="mainPropId")]
	pub main_prop_id:Option<String>,
	#[serde(rename="appendPropId")]
	pub append_prop_id:Option<String>,
	#[serde(rename="statValue",default)]
	pub stat_value:f64,
}
impl RawItemStat{
	pub(crate) fn prop_id(&self)->&str{
		self.append_prop_id.as_deref()
			.or(self.main_prop_id.as_deref())
			.unwrap_or("")
	}
}
