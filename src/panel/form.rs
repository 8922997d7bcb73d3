//! Focusable items of each panel, in focus order

use crate::models::{ChoiceId, FieldId, PanelAction, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    Field(FieldId),
    Choice(ChoiceId),
    Button(PanelAction),
    /// Multi-line configuration editor
    Editor,
}

const NETWORK_ITEMS: &[FormItem] = &[
    FormItem::Field(FieldId::Hostname),
    FormItem::Button(PanelAction::SetHostname),
    FormItem::Button(PanelAction::RefreshNetwork),
];

const RTU_ITEMS: &[FormItem] = &[
    FormItem::Field(FieldId::RtuPort),
    FormItem::Field(FieldId::RtuBaudrate),
    FormItem::Button(PanelAction::RtuConnect),
    FormItem::Button(PanelAction::RtuDisconnect),
    FormItem::Field(FieldId::ReadSlave),
    FormItem::Choice(ChoiceId::ReadKind),
    FormItem::Field(FieldId::ReadStart),
    FormItem::Field(FieldId::ReadQuantity),
    FormItem::Button(PanelAction::RtuRead),
    FormItem::Field(FieldId::WriteSlave),
    FormItem::Choice(ChoiceId::WriteKind),
    FormItem::Field(FieldId::WriteAddr),
    FormItem::Field(FieldId::WriteValue),
    FormItem::Button(PanelAction::RtuWrite),
];

const TCP_ITEMS: &[FormItem] = &[
    FormItem::Field(FieldId::TcpHost),
    FormItem::Field(FieldId::TcpPort),
    FormItem::Button(PanelAction::TcpStart),
    FormItem::Button(PanelAction::TcpStop),
    FormItem::Button(PanelAction::RefreshTcp),
];

const CONFIG_ITEMS: &[FormItem] = &[
    FormItem::Editor,
    FormItem::Button(PanelAction::LoadConfig),
    FormItem::Button(PanelAction::SaveConfig),
];

pub fn items(panel: PanelId) -> &'static [FormItem] {
    match panel {
        PanelId::Network => NETWORK_ITEMS,
        PanelId::Rtu => RTU_ITEMS,
        PanelId::Tcp => TCP_ITEMS,
        PanelId::Config => CONFIG_ITEMS,
    }
}
