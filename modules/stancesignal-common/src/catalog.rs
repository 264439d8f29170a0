//! Static attribute label catalog.
//!
//! Maps raw attribute codes, as stored on user profiles or emitted by an
//! inferrer, to the labels shown in the UI. Tables are compile-time
//! constants; lookups work in both directions.

use crate::types::AttributeType;

const GENDER: &[(&str, &str)] = &[
    ("male", "男性"),
    ("female", "女性"),
    ("other", "その他"),
    ("no_answer", "回答しない"),
];

const AGE_RANGE: &[(&str, &str)] = &[
    ("under_20", "20歳未満"),
    ("20s", "20代"),
    ("30s", "30代"),
    ("40s", "40代"),
    ("50s", "50代"),
    ("60s", "60代"),
    ("70_plus", "70歳以上"),
];

const EDUCATION: &[(&str, &str)] = &[
    ("junior_high", "中学校卒"),
    ("high_school", "高校卒"),
    ("vocational", "専門学校卒"),
    ("junior_college", "短大卒"),
    ("bachelor", "大学卒"),
    ("graduate", "大学院卒"),
];

const OCCUPATION: &[(&str, &str)] = &[
    ("student", "学生"),
    ("employee", "会社員"),
    ("public_servant", "公務員"),
    ("self_employed", "自営業"),
    ("part_time", "パート・アルバイト"),
    ("homemaker", "専業主婦・主夫"),
    ("unemployed", "無職"),
    ("other", "その他"),
];

const POLITICAL_STANCE: &[(&str, &str)] = &[
    ("left", "左派"),
    ("center_left", "中道左派"),
    ("center", "中道"),
    ("center_right", "中道右派"),
    ("right", "右派"),
];

const POLITICAL_PARTY: &[(&str, &str)] = &[
    ("ldp", "自由民主党"),
    ("cdp", "立憲民主党"),
    ("ishin", "日本維新の会"),
    ("komeito", "公明党"),
    ("dpfp", "国民民主党"),
    ("jcp", "日本共産党"),
    ("reiwa", "れいわ新選組"),
    ("sdp", "社会民主党"),
    ("sanseito", "参政党"),
    ("independent", "支持政党なし"),
];

/// All `(code, label)` pairs for an attribute type.
pub fn entries(attribute_type: AttributeType) -> &'static [(&'static str, &'static str)] {
    match attribute_type {
        AttributeType::Gender => GENDER,
        AttributeType::AgeRange => AGE_RANGE,
        AttributeType::Education => EDUCATION,
        AttributeType::Occupation => OCCUPATION,
        AttributeType::PoliticalStance => POLITICAL_STANCE,
        AttributeType::PoliticalParty => POLITICAL_PARTY,
    }
}

/// Display label for a raw code, if the catalog knows it.
pub fn label_for(attribute_type: AttributeType, code: &str) -> Option<&'static str> {
    entries(attribute_type)
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Raw code for a display label, if the catalog knows it.
pub fn code_for(attribute_type: AttributeType, label: &str) -> Option<&'static str> {
    entries(attribute_type)
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(code, _)| *code)
}
