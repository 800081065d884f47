use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Endpoint {
    GetOptions,
    GetLocations,
    GetVersion,
    Mode,
    GetTuned,
    Tune,
    GetProgInfo,
    ProcessKey,
    ProcessCommand,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetOptions => "/info/getOptions",
            Endpoint::GetLocations => "/info/getLocations",
            Endpoint::GetVersion => "/info/getVersion",
            Endpoint::Mode => "/info/mode",
            Endpoint::GetTuned => "/tv/getTuned",
            Endpoint::Tune => "/tv/tune",
            Endpoint::GetProgInfo => "/tv/getProgInfo",
            Endpoint::ProcessKey => "/remote/processKey",
            Endpoint::ProcessCommand => "/serial/processCommand",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
