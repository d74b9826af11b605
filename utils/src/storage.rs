// Instance storage accessors. Every access extends the instance TTL, a missing
// required value aborts with `StorageError::ValueNotInitialized`.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::paste::paste! {
            pub(crate) fn [<set_ $attr_name>](e: &soroban_sdk::Env, $attr_name: &$data_type) {
                $crate::bump::bump_instance(e);
                e.storage().instance().set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::paste::paste! {
            pub(crate) fn [<get_ $attr_name>](e: &soroban_sdk::Env) -> $data_type {
                $crate::bump::bump_instance(e);
                match e.storage().instance().get(&$key) {
                    Some(value) => value,
                    None => soroban_sdk::panic_with_error!(
                        e,
                        $crate::errors::StorageError::ValueNotInitialized
                    ),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::generate_instance_storage_getter!($attr_name, $key, $data_type);
        $crate::generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}
