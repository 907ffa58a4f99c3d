//! Maps content icons onto the lucide set.

use folio_core::content::Icon as ContentIconKind;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

pub fn icon_data(icon: ContentIconKind) -> IconData {
    match icon {
        ContentIconKind::GraduationCap => IconData::LUCIDE_BOOK,
        ContentIconKind::Briefcase => IconData::LUCIDE_BRIEFCASE,
        ContentIconKind::Users => IconData::LUCIDE_USERS,
        ContentIconKind::Video => IconData::LUCIDE_VIDEO,
        ContentIconKind::FileText => IconData::LUCIDE_FILE_TEXT,
        ContentIconKind::Film => IconData::LUCIDE_FILM,
        ContentIconKind::Code => IconData::LUCIDE_CODE,
        ContentIconKind::Globe => IconData::LUCIDE_GLOBE,
        ContentIconKind::Database => IconData::LUCIDE_DATABASE,
        ContentIconKind::Brain => IconData::LUCIDE_CPU,
        ContentIconKind::Zap => IconData::LUCIDE_ZAP,
        ContentIconKind::Github => IconData::LUCIDE_GITHUB,
        ContentIconKind::Linkedin => IconData::LUCIDE_LINKEDIN,
        ContentIconKind::Twitter => IconData::LUCIDE_TWITTER,
        ContentIconKind::Mail => IconData::LUCIDE_MAIL,
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentIconProps {
    pub icon: ContentIconKind,
    #[prop_or(AttrValue::Static("20px"))]
    pub size: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContentIcon)]
pub fn content_icon(props: &ContentIconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())}>
            <Icon data={icon_data(props.icon)} width={props.size.clone()} height={props.size.clone()} />
        </span>
    }
}
