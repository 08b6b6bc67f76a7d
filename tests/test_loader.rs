use std::fs;

use recipe_browser::{BrowserError, Category, DataLoadError, RecipeTable};

const DATASET: &str = "\
Srno,RecipeName,Ingredients,PrepTimeInMins,CookTimeInMins,Servings,Cuisine,Course,Diet,Instructions,URL
1,Masala Karela Recipe,\"6 Karela (Bitter Gourd/ Pavakkai), Salt, 1 Onion\",15,20,6,Indian,Side Dish,Diabetic Friendly,Wash and slice,https://www.archanaskitchen.com/masala-karela-recipe
2,Spicy Tomato Rice,\"2-1/2 cups rice, 3 tomatoes, Salt\",5,10,3,South Indian Recipes,Main Course,Vegetarian,Cook rice,https://www.archanaskitchen.com/spicy-tomato-rice-recipe
3,Ragi Semiya Upma,\"1-1/2 cups Rice Vermicelli Noodles, 1 Onion\",20,30,4,South Indian Recipes,South Indian Breakfast,High Protein Vegetarian,Soak,https://www.archanaskitchen.com/ragi-semiya-upma-recipe
";

#[test]
fn test_load_from_file_with_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");
    fs::write(&path, DATASET).unwrap();

    let table = RecipeTable::from_path(&path).unwrap();
    assert_eq!(table.len(), 3);

    let karela = table.get("Masala Karela Recipe").unwrap();
    assert_eq!(
        karela.ingredients,
        vec!["6 Karela (Bitter Gourd/ Pavakkai)", "Salt", "1 Onion"]
    );
    assert_eq!(karela.prep_time_mins, 15);
    assert_eq!(karela.cook_time_mins, 20);
    assert_eq!(karela.diet, "Diabetic Friendly");

    assert_eq!(
        table.categories(Category::Cuisine),
        vec!["Indian", "South Indian Recipes"]
    );
}

#[test]
fn test_missing_file_is_data_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecipeTable::from_path(dir.path().join("missing.csv")).unwrap_err();

    assert!(matches!(err, BrowserError::DataLoad(DataLoadError::Io { .. })));
    assert!(err.is_fatal());
}

#[test]
fn test_missing_url_column() {
    let csv = "RecipeName,Cuisine,Course,Diet,Ingredients,CookTimeInMins,PrepTimeInMins\n";
    let err = RecipeTable::from_reader(csv.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to load recipe data: Missing required column 'URL'"
    );
}

#[test]
fn test_header_only_file_is_empty_table() {
    let csv = "RecipeName,Cuisine,Course,Diet,Ingredients,CookTimeInMins,PrepTimeInMins,URL\n";
    let table = RecipeTable::from_reader(csv.as_bytes()).unwrap();
    assert!(table.is_empty());
    assert!(table.categories(Category::Diet).is_empty());
}
