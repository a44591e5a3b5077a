use crate::mapping::table::{Mapping, MappingTable};

/// Default source root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "nutriflow-service/src";

/// Default file extension to rewrite.
pub const DEFAULT_EXTENSION: &str = "java";

/// The nutriflow reorganization: the flat `model`, `model.dto` and `service`
/// packages split into per-feature packages.
///
/// Order matters. `model.mealplan` is moved to `mealplan.model` first, and the
/// DTO entries that follow pick up the already-moved names.
pub const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
	// user
	("com.example.nutriflow.model.User", "com.example.nutriflow.user.model.User"),
	("com.example.nutriflow.model.UserTarget", "com.example.nutriflow.user.model.UserTarget"),
	(
		"com.example.nutriflow.model.UserHealthHistory",
		"com.example.nutriflow.user.model.UserHealthHistory",
	),
	(
		"com.example.nutriflow.model.dto.UpdateUserRequestDTO",
		"com.example.nutriflow.user.dto.UpdateUserRequestDTO",
	),
	(
		"com.example.nutriflow.model.dto.UpdateUserTargetRequestDTO",
		"com.example.nutriflow.user.dto.UpdateUserTargetRequestDTO",
	),
	(
		"com.example.nutriflow.model.dto.HealthStatisticsResponseDTO",
		"com.example.nutriflow.user.dto.HealthStatisticsResponseDTO",
	),
	// recipe
	("com.example.nutriflow.model.Recipe", "com.example.nutriflow.recipe.model.Recipe"),
	(
		"com.example.nutriflow.model.RecipeIngredient",
		"com.example.nutriflow.recipe.model.RecipeIngredient",
	),
	(
		"com.example.nutriflow.model.FavoriteRecipe",
		"com.example.nutriflow.recipe.model.FavoriteRecipe",
	),
	// mealplan
	("com.example.nutriflow.model.mealplan", "com.example.nutriflow.mealplan.model"),
	(
		"com.example.nutriflow.mealplan.model.MealPlanRequestDto",
		"com.example.nutriflow.mealplan.dto.MealPlanRequestDto",
	),
	(
		"com.example.nutriflow.mealplan.model.MealPlanResponseDto",
		"com.example.nutriflow.mealplan.dto.MealPlanResponseDto",
	),
	(
		"com.example.nutriflow.mealplan.model.DailyMealPlanDetailDto",
		"com.example.nutriflow.mealplan.dto.DailyMealPlanDetailDto",
	),
	(
		"com.example.nutriflow.mealplan.model.MealPlanAlternativeRequestDto",
		"com.example.nutriflow.mealplan.dto.MealPlanAlternativeRequestDto",
	),
	// ingredient
	(
		"com.example.nutriflow.model.IngredientNutrition",
		"com.example.nutriflow.ingredient.model.IngredientNutrition",
	),
	// pantry
	("com.example.nutriflow.model.PantryItem", "com.example.nutriflow.pantry.model.PantryItem"),
	// substitution
	(
		"com.example.nutriflow.model.SubstitutionRule",
		"com.example.nutriflow.substitution.model.SubstitutionRule",
	),
	(
		"com.example.nutriflow.model.dto.SubstitutionCheckRequest",
		"com.example.nutriflow.substitution.dto.SubstitutionCheckRequest",
	),
	(
		"com.example.nutriflow.model.dto.SubstitutionCheckResponse",
		"com.example.nutriflow.substitution.dto.SubstitutionCheckResponse",
	),
	(
		"com.example.nutriflow.model.dto.SubstitutionSuggestionDto",
		"com.example.nutriflow.substitution.dto.SubstitutionSuggestionDto",
	),
	(
		"com.example.nutriflow.model.dto.OffenderDto",
		"com.example.nutriflow.substitution.dto.OffenderDto",
	),
	// shared
	("com.example.nutriflow.model.enums", "com.example.nutriflow.shared.enums"),
	// services
	(
		"com.example.nutriflow.service.UserService",
		"com.example.nutriflow.user.service.UserService",
	),
	(
		"com.example.nutriflow.service.UserTargetService",
		"com.example.nutriflow.user.service.UserTargetService",
	),
	(
		"com.example.nutriflow.service.HealthStatisticsService",
		"com.example.nutriflow.user.service.HealthStatisticsService",
	),
	(
		"com.example.nutriflow.service.RecipeService",
		"com.example.nutriflow.recipe.service.RecipeService",
	),
	(
		"com.example.nutriflow.service.AIRecipeService",
		"com.example.nutriflow.recipe.service.AIRecipeService",
	),
	(
		"com.example.nutriflow.service.MealPlanService",
		"com.example.nutriflow.mealplan.service.MealPlanService",
	),
	(
		"com.example.nutriflow.service.IngredientNutritionService",
		"com.example.nutriflow.ingredient.service.IngredientNutritionService",
	),
	(
		"com.example.nutriflow.service.PantryService",
		"com.example.nutriflow.pantry.service.PantryService",
	),
	(
		"com.example.nutriflow.service.SubstitutionService",
		"com.example.nutriflow.substitution.service.SubstitutionService",
	),
	// repositories
	("com.example.nutriflow.service.repository", "com.example.nutriflow"),
];

/// Build the built-in mapping table.
pub fn builtin_table() -> MappingTable {
	let entries = BUILTIN_MAPPINGS
		.iter()
		.map(|(from, to)| Mapping::new(*from, *to))
		.collect();

	// Covered by test_builtin_table_is_valid.
	MappingTable::new(entries).expect("built-in mapping table is valid")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_table_is_valid() {
		let entries: Vec<_> = BUILTIN_MAPPINGS
			.iter()
			.map(|(from, to)| Mapping::new(*from, *to))
			.collect();
		assert!(MappingTable::new(entries).is_ok());
	}

	#[test]
	fn test_builtin_table_size_and_order() {
		let table = builtin_table();
		assert_eq!(table.len(), 32);

		let entries = table.entries();
		assert_eq!(entries[0].from, "com.example.nutriflow.model.User");
		assert_eq!(entries[9].from, "com.example.nutriflow.model.mealplan");
		assert_eq!(
			entries[10].from,
			"com.example.nutriflow.mealplan.model.MealPlanRequestDto"
		);
		assert_eq!(entries[31].to, "com.example.nutriflow");
	}
}
