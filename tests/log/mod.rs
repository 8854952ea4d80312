mod log_follows_parents_to_the_root;
mod the_global_log_spans_all_branches;
