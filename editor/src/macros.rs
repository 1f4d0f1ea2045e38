/// Counts args in the macro invocation by adding `+ 1` for every arg.
macro_rules! count_args {
	(@one $($t:tt)*) => { 1 };
	($(($($x:tt)*)),*$(,)?) => {
		0 $(+ count_args!(@one $($x)*))*
	};
}

/// Generates the [`std::collections::HashMap`] of boxed message handlers held in `ToolData`.
///
/// # Example
///
/// ```ignore
/// let tools = gen_tools_hash_map! {
/// 	Select => select::Select,
/// 	Line => line::Line,
/// };
/// ```
macro_rules! gen_tools_hash_map {
	($($enum_variant:ident => $struct_path:ty),* $(,)?) => {{
		let mut hash_map: ::std::collections::HashMap<$crate::viewport_tools::tool::ToolType, ::std::boxed::Box<$crate::viewport_tools::tool::SubToolMessageHandler>> =
			::std::collections::HashMap::with_capacity(count_args!($(($enum_variant)),*));
		$(hash_map.insert($crate::viewport_tools::tool::ToolType::$enum_variant, ::std::boxed::Box::new(<$struct_path>::default()));)*

		hash_map
	}};
}
