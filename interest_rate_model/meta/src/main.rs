fn main() {
    multiversx_sc_meta_lib::cli_main::<interest_rate_model::AbiProvider>();
}
