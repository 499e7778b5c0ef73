/// Callback supplied by the host, invoked synchronously with the activated
/// entry's `value`. One activation produces exactly one call. A no-op closure
/// makes activation inert, which is fine.
pub type OnPicked = Box<dyn FnMut(String) + Send>;
