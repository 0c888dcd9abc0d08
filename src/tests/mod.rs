mod failure_paths;
