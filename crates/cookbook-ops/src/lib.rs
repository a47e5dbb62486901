pub mod ops_build;
pub mod ops_merge_envs;
pub mod ops_toc;
