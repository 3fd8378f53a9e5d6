/// An object representing a resource that can be used for monitoring, logging,
/// billing, or other purposes.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MonitoredResource {
    /// Required. The monitored resource type, for example `"gce_instance"`.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    /// Required. Values for all of the labels listed in the associated monitored
    /// resource descriptor.
    #[prost(map = "string, string", tag = "2")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
}
impl ::prost::Name for MonitoredResource {
    const NAME: &'static str = "MonitoredResource";
    const PACKAGE: &'static str = "google.api";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("google.api.{}", Self::NAME)
    }
}
